//! Step name validation.
//! Every step name must pass before anything is created on disk.

use crate::constants::{STEP_NAME_KEYWORDS, STEP_NAME_MAX, STEP_NAME_MIN};
use crate::error::{Error, Result, StepNameReason};
use crate::settings::value_type_name;
use crate::step::{RawStep, Step};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Identifier grammar of the generated Python packages.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_\p{XID_Start}]\p{XID_Continue}*$").expect("identifier pattern is valid")
});

/// Bounds and deny-list applied to step names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    /// Minimum name length in characters
    pub min_len: usize,
    /// Maximum name length in characters
    pub max_len: usize,
    /// Names that may not be used
    pub keywords: Vec<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_len: STEP_NAME_MIN,
            max_len: STEP_NAME_MAX,
            keywords: STEP_NAME_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Validates step names against a set of [`NameRules`].
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    rules: NameRules,
}

impl NameValidator {
    pub fn new(rules: NameRules) -> Self {
        Self { rules }
    }

    /// Validates a single step name and returns it trimmed.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// type, identifier, minimum length, maximum length, reserved keyword.
    ///
    /// # Errors
    /// * `Error::IncorrectTypeArgument` if the name is not a string
    /// * `Error::IncorrectStepName` with the reason of the failed check
    pub fn validate_name(&self, name: &serde_json::Value) -> Result<String> {
        let serde_json::Value::String(name) = name else {
            return Err(Error::IncorrectTypeArgument {
                expected: "string",
                actual: value_type_name(name),
            });
        };
        let name = name.trim();

        let reason = if !is_identifier(name) {
            Some(StepNameReason::NotIdentifier)
        } else if name.chars().count() < self.rules.min_len {
            Some(StepNameReason::TooShort)
        } else if name.chars().count() > self.rules.max_len {
            Some(StepNameReason::TooLong)
        } else if self.rules.keywords.iter().any(|keyword| keyword == name) {
            Some(StepNameReason::ReservedKeyword)
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::IncorrectStepName {
                step_name: name.to_string(),
                reason,
            }),
            None => Ok(name.to_string()),
        }
    }

    /// Validates every step and converts them into [`Step`]s.
    ///
    /// This is a separate pass: nothing is returned unless all names are valid.
    pub fn validate_steps(&self, steps: Vec<RawStep>) -> Result<Vec<Step>> {
        debug!("Validating {} step name(s)", steps.len());
        steps
            .into_iter()
            .map(|step| {
                let name = self.validate_name(&step.name)?;
                Ok(Step::new(name, step.input_data))
            })
            .collect()
    }
}

/// Returns true if `name` is a bare identifier: an underscore or a letter
/// (Unicode XID_Start) followed by identifier characters (XID_Continue).
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}
