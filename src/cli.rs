//! Command-line interface implementation for gostrap.
//! Provides argument parsing and help text formatting using clap.

use crate::config::{Config, FailurePolicy};
use crate::constants::DEFAULT_GO_VERSION;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for gostrap.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gostrap: scaffold a new Go project from a template",
    long_about = None,
    after_help = "Long options need two dashes, e.g. --projectName=torugo."
)]
pub struct Args {
    /// Name of the project, used as the Go module name
    #[arg(short, long, value_name = "NAME", aliases = ["project-name", "projectName"])]
    pub name: String,

    /// Existing directory where the project will be created
    #[arg(short, long, value_name = "PATH", aliases = ["project-path", "projectPath"])]
    pub path: PathBuf,

    /// Template directory on disk; the bundled templates are used when omitted
    #[arg(short, long, value_name = "DIR", alias = "templateDir")]
    pub template_dir: Option<PathBuf>,

    /// Go version to use in the project
    #[arg(short, long, value_name = "VERSION", default_value = DEFAULT_GO_VERSION)]
    pub goversion: String,

    /// Stop at the first template that cannot be generated
    #[arg(long)]
    pub fail_fast: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the run configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        let failure_policy = if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::BestEffort
        };
        Config::default()
            .with_go_version(&self.goversion)
            .with_failure_policy(failure_policy)
    }
}

/// Exit status for an argument parse failure.
///
/// A missing required flag is answered with the help text and status 0;
/// every other parse error keeps clap's own status.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.kind() == ErrorKind::MissingRequiredArgument {
        0
    } else {
        err.exit_code()
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let printed = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(err) = printed {
                    eprintln!("{err}");
                }
                std::process::exit(parse_error_exit_code(&e));
            } else {
                e.exit();
            }
        }
    }
}
