//! Error handling for gostrap.
//! Defines the error taxonomy shared by the binder, the tree copier and the
//! post-copy rewriter, together with the mapping to process exit codes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for invalid user input (missing name, missing directories).
pub const EXIT_INVALID_INPUT: i32 = 1;

/// Exit code for failures while reading, rendering or writing files.
pub const EXIT_IO_FAILURE: i32 = 2;

/// Errors produced while scaffolding a project.
///
/// Wrapping variants keep the underlying cause reachable through
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Project name is empty.")]
    ProjectNameEmpty,

    #[error("Not a directory: '{path}'.")]
    NotADirectory { path: PathBuf },

    #[error("Module file does not exist in the template directory '{template_dir}'.")]
    NoModuleFile { template_dir: PathBuf },

    #[error("File reader is not set.")]
    NilReader,

    #[error("Could not read template directory: {source}.")]
    TemplateDir {
        #[source]
        source: io::Error,
    },

    #[error("Could not read template '{name}': {source}.")]
    ReadTemplate {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not write '{path}': {source}.")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not copy '{path}': {source}.")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Walk failed: {source}.")]
    Walk {
        #[source]
        source: walkdir::Error,
    },

    #[error("Could not rename workspace '{from}' to '{to}': {source}.")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not update module name in '{path}': {source}.")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template render error: {0}.")]
    Render(#[from] minijinja::Error),

    #[error("Project generation finished with {failed} failed template(s).")]
    GenerationIncomplete { failed: usize },
}

impl Error {
    /// Returns true for errors caused by the arguments rather than by the filesystem.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::ProjectNameEmpty
                | Error::NotADirectory { .. }
                | Error::NoModuleFile { .. }
                | Error::NilReader
        )
    }

    /// Process exit code to report this error with.
    pub fn exit_code(&self) -> i32 {
        if self.is_invalid_input() {
            EXIT_INVALID_INPUT
        } else {
            EXIT_IO_FAILURE
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that logs the error and exits the program.
///
/// # Behavior
/// Emits a single `error` log line and exits with [`Error::exit_code`].
pub fn default_error_handler(err: Error) {
    log::error!("{err}");
    std::process::exit(err.exit_code());
}
