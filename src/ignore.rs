//! File and directory ignore handling for the tree copier.
//! Entries whose base name is in the set never reach the destination tree;
//! an ignored directory takes its whole subtree with it.

use crate::constants::DEFAULT_IGNORED;
use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Fixed set of literal base names excluded from the copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// Creates a set from the given names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a set that ignores nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Checks whether a base name is ignored.
    pub fn contains<S: AsRef<OsStr>>(&self, name: S) -> bool {
        match name.as_ref().to_str() {
            Some(name) => self.names.contains(name),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED)
    }
}
