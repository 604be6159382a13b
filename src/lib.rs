//! amlctor scaffolds multi-step data pipelines.
//! It turns the steps declared in a pipeline's settings into step directories
//! holding a processing script, a data-loader module and a wiring module.

/// Command-line interface module for the amlctor application
pub mod cli;

/// Common constants: settings file names, default module names, name rules
pub mod constants;

/// Data-loader module content derivation
pub mod dataloader;

/// Error types and handling for the amlctor application
pub mod error;

/// The `apply` entry point: pipeline gate, validation and scaffolding
pub mod handler;

pub mod logger;

/// Pipeline root detection
pub mod pipe;

/// Named template rendering
pub mod renderer;

/// Step directory and file generation
pub mod scaffold;

/// Pipeline settings loading
/// Supports JSON and YAML formats (settings.yaml, settings.yml, settings.json)
pub mod settings;

/// Pipeline step model
pub mod step;

/// Step name validation
pub mod validation;
