//! Command-line interface implementation for amlctor.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for amlctor.
#[derive(Parser, Debug)]
#[command(author, version, about = "amlctor: data pipeline scaffolding tool", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create the step directories and modules of a pipeline
    Apply {
        /// Pipeline root directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Load the `data_loaders` and `aml` templates from this directory
        /// instead of the built-in ones
        #[arg(long, value_name = "DIR")]
        templates_dir: Option<PathBuf>,
    },
    /// Check the step names of a pipeline without creating anything
    Validate {
        /// Pipeline root directory
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand or its arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
