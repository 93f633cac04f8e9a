use crate::reader::interface::{Entry, FileReader};
use crate::reader::list_children;
use std::collections::BTreeMap;
use std::io;

/// Reader over files held in memory, keyed by their logical path.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, replacing any previous content under the same name.
    pub fn with_file<S, C>(mut self, name: S, content: C) -> Self
    where
        S: Into<String>,
        C: Into<Vec<u8>>,
    {
        self.files.insert(name.into(), content.into());
        self
    }
}

impl FileReader for MemoryReader {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("file '{name}' not found"))
            })
    }

    fn list_entries(&self, dir: &str) -> io::Result<Vec<Entry>> {
        list_children(self.files.keys(), dir)
    }
}
