//! Pipeline root detection.

use crate::error::{Error, Result};
use crate::settings::find_settings_file;
use std::path::Path;

/// Decides whether a directory is the root of a pipeline.
pub trait PipeDetector {
    fn is_pipe(&self, path: &Path) -> bool;
}

/// Treats a directory as a pipeline root when it holds a settings file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SettingsFileDetector;

impl PipeDetector for SettingsFileDetector {
    fn is_pipe(&self, path: &Path) -> bool {
        path.is_dir() && find_settings_file(path).is_some()
    }
}

/// Fails with `Error::PathHasNoPipeline` unless `path` is a pipeline root.
pub fn check_path<P: AsRef<Path>>(detector: &dyn PipeDetector, path: P) -> Result<()> {
    let path = path.as_ref();
    if !detector.is_pipe(path) {
        return Err(Error::PathHasNoPipeline {
            path: path.display().to_string(),
        });
    }
    Ok(())
}
