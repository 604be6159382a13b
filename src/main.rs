//! amlctor's main application entry point.
//! Parses the command line, sets up logging and runs the requested command.

use amlctor::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Result},
    handler::ApplyHandler,
    logger::init_logger,
    pipe::SettingsFileDetector,
    renderer::MiniJinjaRenderer,
    validation::NameRules,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Checks that the path is a pipeline root
/// 2. Validates every step name
/// 3. For `apply`, creates the step directories and their modules
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Apply { path, templates_dir } => {
            let renderer = match templates_dir {
                Some(dir) => MiniJinjaRenderer::from_dir(dir),
                None => MiniJinjaRenderer::new(),
            };
            let handler = ApplyHandler::new(
                path,
                &SettingsFileDetector,
                &renderer,
                NameRules::default(),
            )?;
            let report = handler.start()?;

            for step_dir in &report.step_dirs {
                println!("Created step: '{}'", step_dir.display());
            }
            println!("Pipeline '{}' scaffolded successfully.", report.pipe_name);
        }
        Command::Validate { path } => {
            let renderer = MiniJinjaRenderer::new();
            let handler = ApplyHandler::new(
                path,
                &SettingsFileDetector,
                &renderer,
                NameRules::default(),
            )?;
            let steps = handler.validate()?;
            println!(
                "{} step(s) valid in '{}'.",
                steps.len(),
                handler.path().display()
            );
        }
    }
    Ok(())
}
