use amlctor::dataloader::{
    create_dataloader_content, loader_inputs, InputDescriptor, ReaderKind, SUPPORTED_EXTENSIONS,
};
use amlctor::error::{Error, Result};
use amlctor::renderer::TemplateRenderer;
use amlctor::step::{DataInput, FileInput, PathInput, Step};
use serde_json::json;
use std::cell::RefCell;

/// Records every render call and returns the context as text.
#[derive(Default)]
struct FakeRenderer {
    calls: RefCell<Vec<(String, serde_json::Value)>>,
}

impl TemplateRenderer for FakeRenderer {
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String> {
        let call = (template_name.to_string(), context.clone());
        self.calls.borrow_mut().push(call);
        Ok(context.to_string())
    }
}

fn file(name: &str, filename: &str) -> DataInput {
    DataInput::File(FileInput {
        name: name.to_string(),
        filename: filename.to_string(),
    })
}

fn path(name: &str, path: &str) -> DataInput {
    DataInput::Path(PathInput {
        name: name.to_string(),
        path: path.to_string(),
    })
}

#[test]
fn test_extension_mapping() {
    for (filename, method) in [
        ("a.parquet", "read_parquet()"),
        ("a.csv", "read_csv()"),
        ("a.xls", "read_excel()"),
        ("a.xlsx", "read_excel()"),
        ("a.json", "read_json()"),
    ] {
        let kind = ReaderKind::for_filename(filename).unwrap();
        assert_eq!(kind.method(), Some(method));
    }
}

#[test]
fn test_unsupported_extension() {
    match ReaderKind::for_filename("a.txt") {
        Err(Error::UnsupportedFileType {
            filename,
            supported,
        }) => {
            assert_eq!(filename, "a.txt");
            assert_eq!(supported, SUPPORTED_EXTENSIONS.to_vec());
        }
        other => panic!("Expected UnsupportedFileType, got {other:?}"),
    }
    assert!(ReaderKind::for_filename("orders").is_err());
    assert!(ReaderKind::for_filename("orders.csv.bak").is_err());
}

#[test]
fn test_path_input_descriptor() {
    let descriptor = InputDescriptor::from_input(&path("p", "/data/raw")).unwrap();
    assert_eq!(
        descriptor,
        InputDescriptor("/data/raw".to_string(), ReaderKind::RawPath)
    );
    assert_eq!(
        serde_json::to_value(&descriptor).unwrap(),
        json!(["/data/raw", -1])
    );
}

#[test]
fn test_path_input_ignores_extension() {
    let input = path("notes", "/data/notes.txt");
    let descriptor = InputDescriptor::from_input(&input).unwrap();
    assert_eq!(descriptor.1, ReaderKind::RawPath);
}

#[test]
fn test_loader_inputs_keep_declaration_order() {
    let step = Step::new(
        "ingest",
        vec![
            file("zeta", "z.csv"),
            path("alpha", "/data/a"),
            file("mid", "m.parquet"),
        ],
    );

    let inputs = loader_inputs(&step).unwrap();
    let keys: Vec<&str> = inputs.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
    assert_eq!(
        serde_json::to_string(&inputs).unwrap(),
        r#"{"zeta":["z.csv","read_csv()"],"alpha":["/data/a",-1],"mid":["m.parquet","read_parquet()"]}"#
    );
}

#[test]
fn test_create_dataloader_content() {
    let renderer = FakeRenderer::default();
    let step = Step::new(
        "ingest",
        vec![file("orders", "orders.csv"), path("raw", "/data/raw")],
    );

    let result = create_dataloader_content(&renderer, &step).unwrap();
    assert_eq!(result.keys, vec!["orders".to_string(), "raw".to_string()]);

    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "data_loaders");
    assert_eq!(
        calls[0].1,
        json!({
            "inputs": {
                "orders": ["orders.csv", "read_csv()"],
                "raw": ["/data/raw", -1]
            }
        })
    );
    assert_eq!(result.content, calls[0].1.to_string());
}

#[test]
fn test_create_dataloader_content_is_deterministic() {
    let renderer = FakeRenderer::default();
    let step = Step::new("ingest", vec![file("b", "b.json"), file("a", "a.xlsx")]);

    let first = create_dataloader_content(&renderer, &step).unwrap();
    let second = create_dataloader_content(&renderer, &step).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_create_dataloader_content_without_inputs() {
    let renderer = FakeRenderer::default();
    let step = Step::new("ingest", Vec::new());

    let result = create_dataloader_content(&renderer, &step).unwrap();
    assert!(result.keys.is_empty());
}

#[test]
fn test_unsupported_file_fails_before_rendering() {
    let renderer = FakeRenderer::default();
    let step = Step::new(
        "ingest",
        vec![file("orders", "orders.csv"), file("notes", "notes.txt")],
    );

    let result = create_dataloader_content(&renderer, &step);
    assert!(matches!(result, Err(Error::UnsupportedFileType { .. })));
    assert!(renderer.calls.borrow().is_empty());
}
