//! Project setup from an on-disk template directory.
//!
//! Runs validation, the tree copy and the post-copy rewrite in sequence. Each
//! step stops the setup on failure; whatever was already written stays on disk.

use crate::config::Config;
use crate::copier::copy_template_to_project;
use crate::error::{Error, Result};
use crate::finalize::finalize;
use log::info;
use std::path::Path;

/// Sets up a new project by copying the template into `project_path`.
///
/// The template directory must contain the module file. The project name
/// becomes the module name and the name of the workspace file.
///
/// # Errors
/// * `Error::NotADirectory` if either directory does not exist
/// * `Error::ProjectNameEmpty` if `project_name` is empty
/// * `Error::NoModuleFile` if the template has no module file
/// * Any copy, rename or rewrite error from the later steps
pub fn setup<P: AsRef<Path>, Q: AsRef<Path>>(
    project_name: &str,
    project_path: P,
    template_dir: Q,
    config: &Config,
) -> Result<()> {
    let project_path = project_path.as_ref();
    let template_dir = template_dir.as_ref();
    info!(
        "Setting up project '{}' in '{}' from '{}'.",
        project_name,
        project_path.display(),
        template_dir.display()
    );

    validate(project_name, project_path, template_dir, config)?;
    copy_template_to_project(template_dir, project_path, &config.ignore)?;
    finalize(project_name, project_path, config)?;

    info!(
        "Project '{}' is ready in '{}'.",
        project_name,
        project_path.display()
    );
    Ok(())
}

/// Checks the setup inputs without touching the filesystem.
pub fn validate(
    project_name: &str,
    project_path: &Path,
    template_dir: &Path,
    config: &Config,
) -> Result<()> {
    for dir in [project_path, template_dir] {
        if !dir.is_dir() {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
    }
    if project_name.is_empty() {
        return Err(Error::ProjectNameEmpty);
    }
    if !template_dir.join(&config.module_file).is_file() {
        return Err(Error::NoModuleFile {
            template_dir: template_dir.to_path_buf(),
        });
    }
    Ok(())
}
