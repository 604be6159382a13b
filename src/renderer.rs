//! Template renderer for the generated step modules.
//! Templates are looked up by name, either from the set built into the
//! binary or from a templates directory on disk.
use crate::constants::{AML_TEMPLATE, DATALOADER_TEMPLATE};
use crate::error::Result;
use log::debug;
use minijinja::Environment;
use std::path::PathBuf;

const DATALOADER_SOURCE: &str = include_str!("../templates/apply/data_loaders");
const AML_SOURCE: &str = include_str!("../templates/apply/aml");

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `template_name` - Name of the template to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer serving the built-in templates.
    pub fn new() -> Self {
        let mut env = Self::environment();
        env.set_loader(|name| {
            Ok(match name {
                DATALOADER_TEMPLATE => Some(DATALOADER_SOURCE.to_string()),
                AML_TEMPLATE => Some(AML_SOURCE.to_string()),
                _ => None,
            })
        });
        Self { env }
    }

    /// Creates a renderer loading templates from `templates_dir`.
    pub fn from_dir<P: Into<PathBuf>>(templates_dir: P) -> Self {
        let templates_dir = templates_dir.into();
        debug!("Loading templates from {}", templates_dir.display());
        let mut env = Self::environment();
        env.set_loader(minijinja::path_loader(templates_dir));
        Self { env }
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template is unknown or fails to render
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(template_name)?;
        Ok(tmpl.render(context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_data_loaders_template() {
        let renderer = MiniJinjaRenderer::new();
        let context = json!({
            "inputs": {
                "orders": ["orders.csv", "read_csv()"],
                "raw": ["/data/raw", -1]
            }
        });

        let content = renderer.render(DATALOADER_TEMPLATE, &context).unwrap();
        assert!(content.contains("orders = pd.read_csv(\"orders.csv\")"));
        assert!(content.contains("raw = Path(\"/data/raw\")"));
        let orders = content.find("orders =").unwrap();
        let raw = content.find("raw =").unwrap();
        assert!(orders < raw);
    }

    #[test]
    fn test_builtin_aml_template() {
        let renderer = MiniJinjaRenderer::new();
        let context = json!({
            "dataloader_name": "data_loader.py",
            "keys": ["orders", "raw"]
        });

        let content = renderer.render(AML_TEMPLATE, &context).unwrap();
        assert!(content.contains("from data_loader import orders, raw"));
        assert!(content.contains("\"orders\": orders,"));
    }

    #[test]
    fn test_unknown_template() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("missing", &json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }

    #[test]
    fn test_templates_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(AML_TEMPLATE), "{{ keys|join(',') }}").unwrap();

        let renderer = MiniJinjaRenderer::from_dir(temp_dir.path());
        let context = json!({"keys": ["a", "b"]});
        let content = renderer.render(AML_TEMPLATE, &context).unwrap();
        assert_eq!(content, "a,b");
        assert!(renderer.render(DATALOADER_TEMPLATE, &json!({})).is_err());
    }
}
