//! Post-copy rewriting: puts the project name into a freshly copied tree.

use crate::config::Config;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Renames the workspace file and rewrites the module declaration.
///
/// Must only run after the template was copied into `dest_root`.
pub fn finalize<P: AsRef<Path>>(project_name: &str, dest_root: P, config: &Config) -> Result<()> {
    let dest_root = dest_root.as_ref();
    rename_workspace(project_name, dest_root, config)?;
    rewrite_module_line(project_name, dest_root.join(&config.module_file))
}

/// Renames `<workspace base><ext>` to `<project_name><ext>` inside `dest_root`.
pub fn rename_workspace<P: AsRef<Path>>(
    project_name: &str,
    dest_root: P,
    config: &Config,
) -> Result<PathBuf> {
    let dest_root = dest_root.as_ref();
    let from = dest_root.join(config.template_workspace_file());
    let to = dest_root.join(config.project_workspace_file(project_name));

    debug!("Renaming '{}' to '{}'.", from.display(), to.display());
    fs::rename(&from, &to).map_err(|source| Error::Rename {
        from,
        to: to.clone(),
        source,
    })?;

    Ok(to)
}

/// Overwrites the first line of the module file with `module <project_name>`.
pub fn rewrite_module_line<P: AsRef<Path>>(project_name: &str, module_file: P) -> Result<()> {
    let module_file = module_file.as_ref();
    let rewrite_err = |source| Error::Rewrite {
        path: module_file.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(module_file).map_err(rewrite_err)?;
    let module_line = format!("module {project_name}");

    debug!("Setting '{}' in '{}'.", module_line, module_file.display());
    let content = replace_first_line(&content, &module_line);
    fs::write(module_file, content).map_err(rewrite_err)
}

/// Replaces the first line of `content`, keeping its line ending and every
/// following line as they are.
pub fn replace_first_line(content: &str, line: &str) -> String {
    match content.find('\n') {
        Some(end) => {
            let end = if content[..end].ends_with('\r') {
                end - 1
            } else {
                end
            };
            format!("{line}{}", &content[end..])
        }
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_first_line() {
        assert_eq!(
            replace_first_line("module old\n\ngo 1.22.0\n", "module new"),
            "module new\n\ngo 1.22.0\n"
        );
        assert_eq!(
            replace_first_line("module old", "module new"),
            "module new"
        );
        assert_eq!(replace_first_line("", "module new"), "module new");
        assert_eq!(replace_first_line("\n", "module new"), "module new\n");
        assert_eq!(
            replace_first_line("old\r\nrest\r\n", "module new"),
            "module new\r\nrest\r\n"
        );
    }
}
