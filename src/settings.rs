//! Pipeline settings handling.
//! Locates the settings file of a pipeline root and maps the recognized keys
//! (`STEPS`, `SCRIPT_MODULE_NAME`, `DATALOADER_MODULE_NAME`, `AML_MODULE_NAME`)
//! into [`Settings`]. Both JSON and YAML are accepted.

use crate::constants::{
    DEFAULT_AML_MODULE_NAME, DEFAULT_DATALOADER_MODULE_NAME, DEFAULT_SCRIPT_MODULE_NAME,
    SETTINGS_DIR, SETTINGS_FILES,
};
use crate::error::{Error, Result};
use crate::step::{DataInput, RawStep};
use indexmap::IndexMap;
use log::debug;
use std::path::{Path, PathBuf};

/// Settings of one pipeline, read once per scaffolding run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub steps: Vec<RawStep>,
    pub script_module_name: String,
    pub dataloader_module_name: String,
    pub aml_module_name: String,
}

/// Returns the first existing settings file under `<root>/settings/`.
pub fn find_settings_file<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
    let settings_dir = root.as_ref().join(SETTINGS_DIR);
    SETTINGS_FILES
        .iter()
        .map(|file| settings_dir.join(file))
        .find(|path| path.is_file())
}

/// Loads the settings of the pipeline rooted at `root`.
///
/// # Errors
/// * `Error::ConfigError` if no settings file exists or its content is invalid
/// * `Error::IoError` if the file cannot be read
pub fn load_settings<P: AsRef<Path>>(root: P) -> Result<Settings> {
    let root = root.as_ref();
    let path = find_settings_file(root).ok_or_else(|| {
        Error::ConfigError(format!(
            "No settings file found in '{}' (tried: {})",
            root.join(SETTINGS_DIR).display(),
            SETTINGS_FILES.join(", ")
        ))
    })?;

    debug!("Loading settings from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

/// Parses settings content, JSON first and YAML as a fallback.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let mut raw: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid settings format: {e}")))?,
    };

    let steps = match raw.shift_remove("STEPS") {
        Some(serde_json::Value::Array(steps)) => steps
            .into_iter()
            .map(parse_step)
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(Error::ConfigError(format!(
                "STEPS must be a sequence, got {}",
                value_type_name(&other)
            )))
        }
        None => return Err(Error::ConfigError("STEPS is not defined".to_string())),
    };

    Ok(Settings {
        steps,
        script_module_name: module_name(&raw, "SCRIPT_MODULE_NAME", DEFAULT_SCRIPT_MODULE_NAME)?,
        dataloader_module_name: module_name(
            &raw,
            "DATALOADER_MODULE_NAME",
            DEFAULT_DATALOADER_MODULE_NAME,
        )?,
        aml_module_name: module_name(&raw, "AML_MODULE_NAME", DEFAULT_AML_MODULE_NAME)?,
    })
}

fn module_name(
    raw: &IndexMap<String, serde_json::Value>,
    key: &str,
    default: &str,
) -> Result<String> {
    match raw.get(key) {
        None => Ok(default.to_string()),
        Some(serde_json::Value::String(name)) if !name.trim().is_empty() => {
            Ok(name.trim().to_string())
        }
        Some(other) => Err(Error::ConfigError(format!(
            "{key} must be a non-empty string, got {}",
            value_type_name(other)
        ))),
    }
}

fn parse_step(value: serde_json::Value) -> Result<RawStep> {
    let mut step = match value {
        serde_json::Value::Object(step) => step,
        other => {
            return Err(Error::ConfigError(format!(
                "Each step must be a mapping, got {}",
                value_type_name(&other)
            )))
        }
    };

    // The name stays untyped here so the validator can report its actual type.
    let name = step.remove("name").unwrap_or(serde_json::Value::Null);
    let input_data = match step.remove("input_data") {
        None | Some(serde_json::Value::Null) => Vec::new(),
        Some(serde_json::Value::Array(inputs)) => inputs
            .into_iter()
            .map(parse_data_input)
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(Error::ConfigError(format!(
                "input_data must be a sequence, got {}",
                value_type_name(&other)
            )))
        }
    };

    Ok(RawStep { name, input_data })
}

fn parse_data_input(value: serde_json::Value) -> Result<DataInput> {
    if !value.is_object() {
        return Err(Error::ConfigError(format!(
            "Each data input must be a mapping, got {}",
            value_type_name(&value)
        )));
    }

    let variant = match value.get("type") {
        Some(serde_json::Value::String(kind)) => kind.clone(),
        Some(other) => other.to_string(),
        None => "none".to_string(),
    };

    match variant.as_str() {
        "file" | "path" => serde_json::from_value(value)
            .map_err(|e| Error::ConfigError(format!("Invalid {variant} input: {e}"))),
        _ => Err(Error::UnsupportedDataInputVariant { variant }),
    }
}

/// Human readable name of a settings value's type.
pub fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "sequence",
        serde_json::Value::Object(_) => "mapping",
    }
}
