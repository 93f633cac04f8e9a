//! Runs one scaffolding request end to end.

use crate::cli::Args;
use crate::error::Result;
use crate::reader::{EmbeddedReader, FileReader};
use crate::setup::setup;
use crate::templater::Templater;

/// Creates the project described by `args`.
///
/// With a template directory the directory is copied and finalized;
/// otherwise the bundled templates are bound into the destination.
///
/// # Errors
/// * Any setup error when a template directory is given
/// * `Error::GenerationIncomplete` if some bundled templates could not be written
pub fn run(args: Args) -> Result<()> {
    let config = args.config();

    match &args.template_dir {
        Some(template_dir) => setup(&args.name, &args.path, template_dir, &config),
        None => {
            let reader: Box<dyn FileReader> = Box::new(EmbeddedReader::new());
            let templater = Templater::new(Some(reader), &config)?;
            let report = templater
                .generate(&args.name, &args.path, &config.go_version)?
                .into_result()?;
            println!(
                "Project '{}' generated with {} file(s) in {}.",
                args.name,
                report.written.len(),
                args.path.display()
            );
            Ok(())
        }
    }
}
