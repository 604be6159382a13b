//! Data-loader module content.
//! Maps each input of a step to the source it is read from and the pandas
//! reader used for it, then renders the `data_loaders` template.

use crate::constants::DATALOADER_TEMPLATE;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::step::{DataInput, Step};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// File extensions a file input may carry.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".parquet", ".csv", ".xls", ".xlsx", ".json"];

/// Reader kind value of inputs read as raw paths.
pub const RAW_PATH_SENTINEL: i64 = -1;

/// How the generated code reads an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderKind {
    Parquet,
    Csv,
    Excel,
    Json,
    /// No tabular reader, the input is handed over as a path.
    RawPath,
}

impl ReaderKind {
    /// Selects the reader from the extension of `filename`.
    ///
    /// # Errors
    /// * `Error::UnsupportedFileType` for any extension outside [`SUPPORTED_EXTENSIONS`]
    pub fn for_filename(filename: &str) -> Result<Self> {
        if filename.ends_with(".parquet") {
            Ok(ReaderKind::Parquet)
        } else if filename.ends_with(".csv") {
            Ok(ReaderKind::Csv)
        } else if filename.ends_with(".xls") || filename.ends_with(".xlsx") {
            Ok(ReaderKind::Excel)
        } else if filename.ends_with(".json") {
            Ok(ReaderKind::Json)
        } else {
            Err(Error::UnsupportedFileType {
                filename: filename.to_string(),
                supported: SUPPORTED_EXTENSIONS.to_vec(),
            })
        }
    }

    /// The pandas reader method, `None` for raw paths.
    pub fn method(&self) -> Option<&'static str> {
        match self {
            ReaderKind::Parquet => Some("read_parquet()"),
            ReaderKind::Csv => Some("read_csv()"),
            ReaderKind::Excel => Some("read_excel()"),
            ReaderKind::Json => Some("read_json()"),
            ReaderKind::RawPath => None,
        }
    }
}

impl Serialize for ReaderKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.method() {
            Some(method) => serializer.serialize_str(method),
            None => serializer.serialize_i64(RAW_PATH_SENTINEL),
        }
    }
}

/// Source and reader of one input, serialized as `[source, reader]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputDescriptor(pub String, pub ReaderKind);

impl InputDescriptor {
    pub fn from_input(input: &DataInput) -> Result<Self> {
        match input {
            DataInput::File(file) => Ok(Self(
                file.filename.clone(),
                ReaderKind::for_filename(&file.filename)?,
            )),
            DataInput::Path(path) => Ok(Self(path.path.clone(), ReaderKind::RawPath)),
        }
    }
}

/// Rendered data-loader module and the symbol names it defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLoaderContent {
    pub content: String,
    /// Input names in declaration order
    pub keys: Vec<String>,
}

/// Maps every input name of `step` to its descriptor, in declaration order.
pub fn loader_inputs(step: &Step) -> Result<IndexMap<String, InputDescriptor>> {
    step.input_data
        .iter()
        .map(|input| {
            let descriptor = InputDescriptor::from_input(input)?;
            Ok((input.name().to_string(), descriptor))
        })
        .collect()
}

/// Returns the content of the data-loader module of `step` along with the
/// input names the wiring module has to reference.
pub fn create_dataloader_content(
    renderer: &dyn TemplateRenderer,
    step: &Step,
) -> Result<DataLoaderContent> {
    let inputs = loader_inputs(step)?;
    let keys = inputs.keys().cloned().collect();
    let context = serde_json::json!({ "inputs": inputs });
    let content = renderer.render(DATALOADER_TEMPLATE, &context)?;
    Ok(DataLoaderContent { content, keys })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reader_kind_serialization() {
        assert_eq!(
            serde_json::to_value(ReaderKind::Csv).unwrap(),
            json!("read_csv()")
        );
        assert_eq!(
            serde_json::to_value(ReaderKind::RawPath).unwrap(),
            json!(-1)
        );
    }

    #[test]
    fn test_excel_extensions() {
        for filename in ["a.xls", "a.xlsx"] {
            let kind = ReaderKind::for_filename(filename).unwrap();
            assert_eq!(kind, ReaderKind::Excel);
        }
    }

    #[test]
    fn test_unsupported_file_message() {
        let err = ReaderKind::for_filename("notes.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported file: notes.txt. Supports: .parquet, .csv, .xls, .xlsx, .json."
        );
    }
}
