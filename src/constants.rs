//! Common constants used throughout gostrap.

/// Logical directory holding the template set inside a file reader.
pub const TEMPLATE_DIR: &str = "template";

/// Suffix marking a template entry; stripped from the destination name.
pub const TEMPLATE_EXT: &str = ".templ";

/// Module declaration file, which also marks a valid template directory.
pub const MODULE_FILE: &str = "go.mod";

/// Base name of the workspace file shipped by the template.
pub const WORKSPACE_BASE_NAME: &str = "template-for-go-projects";

/// Extension of the workspace file.
pub const WORKSPACE_EXT: &str = ".code-workspace";

/// Go version written to generated projects unless one is supplied.
pub const DEFAULT_GO_VERSION: &str = "1.22.0";

/// Names never copied from a template directory.
pub const DEFAULT_IGNORED: [&str; 5] = ["cli", "bin", ".git", "go.sum", "LICENSE"];
