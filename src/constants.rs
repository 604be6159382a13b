//! Common constants used throughout amlctor.

/// Directory inside the pipeline root holding the settings file
pub const SETTINGS_DIR: &str = "settings";

/// Supported settings file names, tried in order
pub const SETTINGS_FILES: [&str; 3] = ["settings.yaml", "settings.yml", "settings.json"];

/// Extension appended to generated module names
pub const SOURCE_EXTENSION: &str = ".py";

/// Default generated module names when the settings omit them
pub const DEFAULT_SCRIPT_MODULE_NAME: &str = "script";
pub const DEFAULT_DATALOADER_MODULE_NAME: &str = "data_loader";
pub const DEFAULT_AML_MODULE_NAME: &str = "aml";

/// Permission bits for step directories: owner and group rwx, others none
pub const STEP_DIR_MODE: u32 = 0o770;

pub const STEP_NAME_MIN: usize = 3;
pub const STEP_NAME_MAX: usize = 128;

/// Names a step directory may not take. Steps become Python packages, so the
/// language keywords are excluded along with the directories the project uses.
pub const STEP_NAME_KEYWORDS: [&str; 37] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield", "settings", "templates",
];

/// Name of the template producing the data-loader module
pub const DATALOADER_TEMPLATE: &str = "data_loaders";

/// Name of the template producing the wiring module
pub const AML_TEMPLATE: &str = "aml";
