//! Template stores the binder can read from.
//! A store is anything implementing [`FileReader`]: a directory on disk, the
//! bundle compiled into the binary, or an in-memory map used by tests.
use std::collections::BTreeMap;
use std::io;

pub mod embedded;
pub mod interface;
pub mod local;
pub mod memory;

pub use embedded::EmbeddedReader;
pub use interface::{Entry, FileReader};
pub use local::LocalReader;
pub use memory::MemoryReader;

/// Derives the direct children of `dir` from a flat list of file paths.
///
/// Paths nested deeper than one level yield a directory entry for the first
/// component below `dir`.
pub(crate) fn list_children<I, S>(paths: I, dir: &str) -> io::Result<Vec<Entry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = format!("{}/", dir.trim_end_matches('/'));
    let mut children = BTreeMap::new();
    for path in paths {
        let Some(rest) = path.as_ref().strip_prefix(&prefix) else {
            continue;
        };
        match rest.split_once('/') {
            Some((child, _)) => {
                children.insert(child.to_string(), true);
            }
            None if !rest.is_empty() => {
                children.entry(rest.to_string()).or_insert(false);
            }
            None => {}
        }
    }

    if children.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("directory '{dir}' not found"),
        ));
    }

    Ok(children
        .into_iter()
        .map(|(name, is_dir)| Entry { name, is_dir })
        .collect())
}
