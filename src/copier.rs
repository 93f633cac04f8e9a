//! Tree copier for gostrap.
//! Mirrors a template directory into a project directory, skipping every
//! entry whose base name is in the ignore set.

use crate::error::{Error, Result};
use crate::ignore::IgnoreSet;
use log::debug;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Copies `template_root` into `dest_root` in a pre-order walk.
///
/// Ignored directories are not descended into. The walk root itself is never
/// matched against the ignore set. Existing destination files are truncated,
/// so copying twice yields the same tree.
///
/// # Errors
/// * `Error::Walk` if a directory cannot be listed
/// * `Error::Copy` naming the failing path for any create/open/copy failure
pub fn copy_template_to_project<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    dest_root: Q,
    ignore: &IgnoreSet,
) -> Result<()> {
    let template_root = template_root.as_ref();
    let dest_root = dest_root.as_ref();
    debug!(
        "Copying '{}' to '{}'.",
        template_root.display(),
        dest_root.display()
    );

    let keep = |entry: &DirEntry| {
        let ignored = entry.depth() > 0 && ignore.contains(entry.file_name());
        if ignored {
            debug!("Skipping ignored entry: {}", entry.path().display());
        }
        !ignored
    };
    let walker = WalkDir::new(template_root).into_iter().filter_entry(keep);

    for entry in walker {
        let entry = entry.map_err(|source| Error::Walk { source })?;
        let path = entry.path();
        let relative = path.strip_prefix(template_root).map_err(|e| Error::Copy {
            path: path.to_path_buf(),
            source: io::Error::other(e),
        })?;
        let target = dest_root.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else {
            copy_file(path, &target)?;
        }
    }

    Ok(())
}

/// Creates a directory and its parents; succeeds if it already exists.
pub fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path).map_err(|source| Error::Copy {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies a single file byte for byte, truncating the destination.
pub fn copy_file(source: &Path, dest: &Path) -> Result<u64> {
    debug!("Copying file: {}", dest.display());

    let mut source_file = File::open(source).map_err(|e| Error::Copy {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut dest_file = File::create(dest).map_err(|e| Error::Copy {
        path: dest.to_path_buf(),
        source: e,
    })?;

    io::copy(&mut source_file, &mut dest_file).map_err(|e| Error::Copy {
        path: source.to_path_buf(),
        source: e,
    })
}
