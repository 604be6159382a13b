//! Entry point of the `apply` operation.
//! Gates on the pipeline root, validates the steps and hands over to the
//! [`ScaffoldBuilder`].

use crate::error::Result;
use crate::pipe::{check_path, PipeDetector};
use crate::renderer::TemplateRenderer;
use crate::scaffold::{ScaffoldBuilder, ScaffoldReport};
use crate::settings::load_settings;
use crate::step::Step;
use crate::validation::{NameRules, NameValidator};
use log::info;
use std::path::{Path, PathBuf};

pub struct ApplyHandler<'a> {
    path: PathBuf,
    renderer: &'a dyn TemplateRenderer,
    validator: NameValidator,
}

impl<'a> ApplyHandler<'a> {
    /// Creates a handler for the pipeline at `path`.
    ///
    /// # Errors
    /// * `Error::PathHasNoPipeline` if `detector` does not recognize `path`
    pub fn new<P: Into<PathBuf>>(
        path: P,
        detector: &dyn PipeDetector,
        renderer: &'a dyn TemplateRenderer,
        rules: NameRules,
    ) -> Result<Self> {
        let path = path.into();
        check_path(detector, &path)?;
        Ok(Self {
            path,
            renderer,
            validator: NameValidator::new(rules),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates every step name of the pipeline without touching the disk.
    pub fn validate(&self) -> Result<Vec<Step>> {
        let settings = load_settings(&self.path)?;
        let steps = self.validator.validate_steps(settings.steps)?;
        info!(
            "{} step(s) validated in '{}'",
            steps.len(),
            self.path.display()
        );
        Ok(steps)
    }

    /// Scaffolds the pipeline.
    pub fn start(&self) -> Result<ScaffoldReport> {
        ScaffoldBuilder::new(&self.path, self.renderer, &self.validator).start()
    }
}
