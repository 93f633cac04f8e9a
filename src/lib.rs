//! gostrap is a project scaffolding tool for Go projects.
//! It creates a project either by binding the project name and Go version into
//! a template set, or by copying a template directory and renaming the parts
//! that carry the project name.

/// Command-line interface module for the gostrap application
pub mod cli;

/// Immutable run configuration
pub mod config;

/// Well-known names and defaults
pub mod constants;

/// Tree copy of an on-disk template directory
pub mod copier;

/// Error types and handling for the gostrap application
pub mod error;

/// Workspace rename and module line rewrite after a copy
pub mod finalize;

/// Names excluded from the tree copy
pub mod ignore;

pub mod logger;

/// Template stores: local directory, embedded bundle, in-memory
pub mod reader;

/// Placeholder substitution
pub mod renderer;

/// Dispatch between the copy flow and the bundled templates
pub mod runner;

/// Copy-based setup flow
pub mod setup;

/// Template binding and generation
pub mod templater;
