//! Logger setup for the amlctor binary.

/// Initializes `env_logger`: debug output when `verbose`, info otherwise.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .init();
}
