//! gostrap's entry point.
//! Parses the arguments, sets up logging and hands the request to the runner.

use gostrap::{cli::get_args, error::default_error_handler, logger::init_logger, runner::run};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
