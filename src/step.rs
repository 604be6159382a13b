//! Pipeline step model.
//! A step is one stage of the pipeline and becomes one directory on disk.

use serde::Deserialize;

/// A data input backed by a concrete tabular file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileInput {
    pub name: String,
    pub filename: String,
}

/// A data input that is handed to the step as a raw filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathInput {
    pub name: String,
    pub path: String,
}

/// A declared data source feeding a step.
///
/// Input names become symbol names in the generated modules and are expected
/// to be unique within a step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum DataInput {
    #[serde(rename = "file")]
    File(FileInput),
    #[serde(rename = "path")]
    Path(PathInput),
}

impl DataInput {
    pub fn name(&self) -> &str {
        match self {
            DataInput::File(input) => &input.name,
            DataInput::Path(input) => &input.name,
        }
    }
}

/// A step whose name passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Trimmed, validated identifier
    pub name: String,
    pub input_data: Vec<DataInput>,
}

impl Step {
    pub fn new<S: Into<String>>(name: S, input_data: Vec<DataInput>) -> Self {
        Self {
            name: name.into(),
            input_data,
        }
    }
}

/// A step as declared in the settings, before its name is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStep {
    pub name: serde_json::Value,
    pub input_data: Vec<DataInput>,
}
