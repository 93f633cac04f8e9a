//! Template binder for gostrap.
//! Lists the template set once from a [`FileReader`], then for every entry
//! strips the template suffix from its name, binds the project details into
//! its content and writes the result under the destination directory.

use crate::config::{Config, FailurePolicy};
use crate::error::{Error, Result};
use crate::reader::{Entry, FileReader};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Values substituted into template content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings<'a> {
    /// Bound to `Module`.
    pub module: &'a str,
    /// Bound to `GOVersion`.
    pub go_version: &'a str,
}

impl Bindings<'_> {
    /// Rendering context for the bindings.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "Module": self.module,
            "GOVersion": self.go_version,
        })
    }
}

/// A template entry that could not be generated.
#[derive(Debug)]
pub struct EntryFailure {
    pub entry: String,
    pub error: Error,
}

/// Outcome of a best-effort generation.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Destination paths written, in template order.
    pub written: Vec<PathBuf>,
    pub failures: Vec<EntryFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turns swallowed failures into a single aggregate error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::GenerationIncomplete {
                failed: self.failures.len(),
            })
        }
    }
}

/// Removes a single occurrence of the template suffix from an entry name.
///
/// # Example
/// ```
/// use gostrap::templater::destination_name;
///
/// assert_eq!(destination_name("go.mod.templ", ".templ"), "go.mod");
/// assert_eq!(destination_name(".gitignore", ".templ"), ".gitignore");
/// ```
pub fn destination_name(name: &str, template_ext: &str) -> String {
    if template_ext.is_empty() {
        return name.to_string();
    }
    name.replacen(template_ext, "", 1)
}

/// Binds project details into a fixed template set.
pub struct Templater {
    reader: Box<dyn FileReader>,
    renderer: Box<dyn TemplateRenderer>,
    entries: Vec<Entry>,
    template_dir: String,
    template_ext: String,
    failure_policy: FailurePolicy,
}

impl Templater {
    /// Creates a templater and caches the listing of the template directory.
    ///
    /// # Errors
    /// * `Error::NilReader` if no reader is supplied
    /// * `Error::TemplateDir` if the template directory cannot be listed
    /// * `Error::Render` if the renderer cannot be configured
    pub fn new(reader: Option<Box<dyn FileReader>>, config: &Config) -> Result<Self> {
        let reader = reader.ok_or(Error::NilReader)?;
        let entries = reader
            .list_entries(&config.template_dir)
            .map_err(|source| Error::TemplateDir { source })?;

        debug!(
            "Found {} template entries in '{}'.",
            entries.len(),
            config.template_dir
        );

        Ok(Self {
            reader,
            renderer: Box::new(MiniJinjaRenderer::new()?),
            entries,
            template_dir: config.template_dir.clone(),
            template_ext: config.template_ext.clone(),
            failure_policy: config.failure_policy,
        })
    }

    /// Replaces the rendering engine.
    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Template entries cached at construction.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Generates every template entry into `dest`.
    ///
    /// With [`FailurePolicy::BestEffort`] a failing entry is logged and
    /// recorded in the report while the remaining entries are still
    /// generated. With [`FailurePolicy::FailFast`] the first failure is
    /// returned. Nothing is rolled back either way.
    ///
    /// # Errors
    /// * `Error::ProjectNameEmpty` if `project_name` is empty
    /// * `Error::NotADirectory` if `dest` is not an existing directory
    pub fn generate<P: AsRef<Path>>(
        &self,
        project_name: &str,
        dest: P,
        go_version: &str,
    ) -> Result<GenerationReport> {
        let dest = dest.as_ref();
        if project_name.is_empty() {
            return Err(Error::ProjectNameEmpty);
        }
        if !dest.is_dir() {
            return Err(Error::NotADirectory {
                path: dest.to_path_buf(),
            });
        }

        info!(
            "Generating project '{}' in '{}'.",
            project_name,
            dest.display()
        );

        let context = Bindings {
            module: project_name,
            go_version,
        }
        .context();
        let mut report = GenerationReport::default();

        for entry in &self.entries {
            match self.bind_entry(entry, dest, &context) {
                Ok(target) => report.written.push(target),
                Err(error) => match self.failure_policy {
                    FailurePolicy::FailFast => return Err(error),
                    FailurePolicy::BestEffort => {
                        warn!("Skipping template '{}': {}", entry.name, error);
                        report.failures.push(EntryFailure {
                            entry: entry.name.clone(),
                            error,
                        });
                    }
                },
            }
        }

        Ok(report)
    }

    fn bind_entry(
        &self,
        entry: &Entry,
        dest: &Path,
        context: &serde_json::Value,
    ) -> Result<PathBuf> {
        let target = dest.join(destination_name(&entry.name, &self.template_ext));

        if entry.is_dir {
            debug!("Creating directory: {}", target.display());
            fs::create_dir_all(&target).map_err(|source| Error::Write {
                path: target.clone(),
                source,
            })?;
            return Ok(target);
        }

        debug!("Writing file: {}", target.display());

        let mut file = File::create(&target).map_err(|source| Error::Write {
            path: target.clone(),
            source,
        })?;

        let name = format!("{}/{}", self.template_dir, entry.name);
        let content = self
            .reader
            .read_file(&name)
            .map_err(|source| Error::ReadTemplate { name, source })?;

        let rendered = match String::from_utf8(content) {
            Ok(text) => self.renderer.render(&text, context)?.into_bytes(),
            Err(err) => {
                debug!(
                    "Template '{}' is not UTF-8, writing it verbatim.",
                    entry.name
                );
                err.into_bytes()
            }
        };

        file.write_all(&rendered).map_err(|source| Error::Write {
            path: target.clone(),
            source,
        })?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name() {
        assert_eq!(destination_name("main.go.templ", ".templ"), "main.go");
        assert_eq!(destination_name("a.templ.templ", ".templ"), "a.templ");
        assert_eq!(destination_name("README.md", ".templ"), "README.md");
        assert_eq!(destination_name("README.md", ""), "README.md");
    }

    #[test]
    fn test_bindings_context() {
        let bindings = Bindings {
            module: "torugo",
            go_version: "1.22.0",
        };
        assert_eq!(
            bindings.context(),
            serde_json::json!({"Module": "torugo", "GOVersion": "1.22.0"})
        );
    }

    #[test]
    fn test_report_into_result() {
        let report = GenerationReport::default();
        assert!(report.into_result().is_ok());

        let report = GenerationReport {
            written: vec![],
            failures: vec![EntryFailure {
                entry: "a".to_string(),
                error: Error::NilReader,
            }],
        };
        assert!(matches!(
            report.into_result(),
            Err(Error::GenerationIncomplete { failed: 1 })
        ));
    }
}
