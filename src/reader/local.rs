use crate::reader::interface::{Entry, FileReader};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reader for templates stored under a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalReader {
    root: PathBuf,
}

impl LocalReader {
    /// Creates a new LocalReader rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileReader for LocalReader {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(name))
    }

    /// Lists a directory under the root, sorted by name since `read_dir`
    /// gives no ordering guarantee.
    fn list_entries(&self, dir: &str) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(self.root.join(dir))? {
            let dir_entry = dir_entry?;
            entries.push(Entry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                is_dir: dir_entry.file_type()?.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
