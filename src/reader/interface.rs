use std::io;

/// One entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name of the entry.
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    pub fn file<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Read access to a template store.
///
/// Names are logical, `/`-separated paths relative to the root of the store.
pub trait FileReader {
    /// Reads the whole content of a file.
    ///
    /// # Errors
    /// * `io::ErrorKind::NotFound` if the name has no corresponding file
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Lists the direct children of a directory, in a stable order.
    ///
    /// # Errors
    /// * `io::ErrorKind::NotFound` if the directory is absent
    /// * Any other I/O error if the directory cannot be read
    fn list_entries(&self, dir: &str) -> io::Result<Vec<Entry>>;
}
