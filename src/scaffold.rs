//! Step scaffolding.
//! Creates one directory per step under the pipeline root and fills it with
//! the processing script, the data-loader module and the wiring module.

use crate::constants::{AML_TEMPLATE, SOURCE_EXTENSION, STEP_DIR_MODE};
use crate::dataloader::create_dataloader_content;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::settings::{load_settings, Settings};
use crate::step::Step;
use crate::validation::NameValidator;
use log::{debug, info};
use std::fs::{self, DirBuilder, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Name of the pipeline root directory
    pub pipe_name: String,
    /// Created step directories, in step order
    pub step_dirs: Vec<PathBuf>,
}

/// Builds the step layout of a pipeline.
///
/// Scaffolding is not idempotent: a step directory that already exists makes
/// the run fail instead of being merged into.
pub struct ScaffoldBuilder<'a> {
    root: PathBuf,
    renderer: &'a dyn TemplateRenderer,
    validator: &'a NameValidator,
}

impl<'a> ScaffoldBuilder<'a> {
    /// Creates a builder for the pipeline at `root`. Performs no I/O.
    pub fn new<P: Into<PathBuf>>(
        root: P,
        renderer: &'a dyn TemplateRenderer,
        validator: &'a NameValidator,
    ) -> Self {
        Self {
            root: root.into(),
            renderer,
            validator,
        }
    }

    /// Loads the settings, validates every step name and scaffolds the steps.
    ///
    /// # Errors
    /// * Any settings or validation error, before anything is written
    /// * `Error::IoError` if a step directory or processing script already exists
    pub fn start(&self) -> Result<ScaffoldReport> {
        let settings = load_settings(&self.root)?;
        let pipe_name = self.pipe_name()?;
        info!("Scaffolding pipeline '{pipe_name}'");

        let steps = self.validator.validate_steps(settings.steps.clone())?;
        let step_dirs = self.make_step_dirs(&settings, &steps)?;

        Ok(ScaffoldReport { pipe_name, step_dirs })
    }

    /// Creates the directory of every step and the files inside it.
    pub fn make_step_dirs(&self, settings: &Settings, steps: &[Step]) -> Result<Vec<PathBuf>> {
        let mut step_dirs = Vec::with_capacity(steps.len());
        for step in steps {
            let step_path = self.root.join(&step.name);
            debug!("Creating step directory {}", step_path.display());
            create_step_dir(&step_path)?;
            self.create_files(settings, step, &step_path)?;
            step_dirs.push(step_path);
        }
        Ok(step_dirs)
    }

    /// Writes the processing script, data-loader module and wiring module of
    /// `step`, in that order.
    pub fn create_files(&self, settings: &Settings, step: &Step, step_path: &Path) -> Result<()> {
        let script_name = module_file_name(&settings.script_module_name);
        debug!("Creating {}", step_path.join(&script_name).display());
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(step_path.join(&script_name))?;

        let dataloader_name = module_file_name(&settings.dataloader_module_name);
        let dataloader = create_dataloader_content(self.renderer, step)?;
        debug!("Writing {}", step_path.join(&dataloader_name).display());
        fs::write(step_path.join(&dataloader_name), &dataloader.content)?;

        let aml_name = module_file_name(&settings.aml_module_name);
        let context = serde_json::json!({
            "dataloader_name": dataloader_name,
            "keys": dataloader.keys,
        });
        let content = self.renderer.render(AML_TEMPLATE, &context)?;
        debug!("Writing {}", step_path.join(&aml_name).display());
        fs::write(step_path.join(&aml_name), content)?;

        Ok(())
    }

    fn pipe_name(&self) -> Result<String> {
        let root = fs::canonicalize(&self.root)?;
        Ok(root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default())
    }
}

/// Appends the source extension to `name` unless it already ends with it.
pub fn module_file_name(name: &str) -> String {
    if name.ends_with(SOURCE_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{SOURCE_EXTENSION}")
    }
}

fn create_step_dir(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(STEP_DIR_MODE);
    }
    builder.create(path)
}
