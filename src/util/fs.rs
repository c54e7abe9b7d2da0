//! Filesystem helpers
//!
//! Thin wrappers over `std::fs`. Errors are returned to the caller, never
//! logged here.

use std::fs;
use std::io;
use std::path::Path;

/// Permission bits for directories created by [`create_dir`]: the owner can
/// list, create and remove entries; nobody else has access.
pub const PRIVATE_DIR_MODE: u32 = 0o700;

/// Returns `true` only if `path` is a directory with at least one entry.
///
/// A missing path, a file, an unreadable directory and an empty directory all
/// return `false`.
pub fn exist(path: impl AsRef<Path>) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_some_and(|entry| entry.is_ok()),
        Err(_) => false,
    }
}

/// Create `path` and any missing parents with [`PRIVATE_DIR_MODE`].
///
/// Fails with [`io::ErrorKind::AlreadyExists`] when [`exist`] is true for
/// `path`. An existing empty directory is accepted and left as is.
pub fn create_dir(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if exist(path) {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("directory '{}' already exists", path.display()),
        ));
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(PRIVATE_DIR_MODE);
    }
    builder.create(path)
}

/// Size in bytes of the file at `path`.
pub fn file_size(path: impl AsRef<Path>) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}
