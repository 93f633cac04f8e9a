//! Configuration handling for gostrap.
//! The configuration is built once at startup and handed to each component,
//! so nothing in the core reads process-wide state.

use crate::constants::{
    DEFAULT_GO_VERSION, MODULE_FILE, TEMPLATE_DIR, TEMPLATE_EXT, WORKSPACE_BASE_NAME, WORKSPACE_EXT,
};
use crate::ignore::IgnoreSet;

/// What the template binder does when a single entry fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure, keep going and report it at the end.
    #[default]
    BestEffort,
    /// Stop at the first failing entry.
    FailFast,
}

/// Immutable settings shared by the binder, the copier and the rewriter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logical directory listed by the binder.
    pub template_dir: String,
    /// Suffix stripped from template entry names.
    pub template_ext: String,
    /// Module declaration file inside a project.
    pub module_file: String,
    /// Base name of the workspace file renamed after the copy.
    pub workspace_base_name: String,
    pub workspace_ext: String,
    pub go_version: String,
    pub ignore: IgnoreSet,
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: TEMPLATE_DIR.to_string(),
            template_ext: TEMPLATE_EXT.to_string(),
            module_file: MODULE_FILE.to_string(),
            workspace_base_name: WORKSPACE_BASE_NAME.to_string(),
            workspace_ext: WORKSPACE_EXT.to_string(),
            go_version: DEFAULT_GO_VERSION.to_string(),
            ignore: IgnoreSet::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl Config {
    pub fn with_go_version<S: Into<String>>(mut self, go_version: S) -> Self {
        self.go_version = go_version.into();
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// File name of the workspace file as shipped by the template.
    pub fn template_workspace_file(&self) -> String {
        format!("{}{}", self.workspace_base_name, self.workspace_ext)
    }

    /// File name of the workspace file once it carries the project name.
    pub fn project_workspace_file(&self, project_name: &str) -> String {
        format!("{}{}", project_name, self.workspace_ext)
    }
}
