use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use super::error::{KeygenError, Result};

/// Permission bits for both key files
#[cfg(unix)]
pub const KEY_FILE_MODE: u32 = 0o600;

/// Creates or truncates `path` with owner-only access and writes `contents`.
///
/// An existing file has its permissions narrowed before anything is written.
pub fn write_owner_only(path: &Path, contents: &[u8]) -> Result<()> {
    write_file(path, contents).map_err(|source| KeygenError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote key file");
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = open_owner_only(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(unix)]
fn open_owner_only(path: &Path) -> io::Result<File> {
    use std::fs::Permissions;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(KEY_FILE_MODE)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(Permissions::from_mode(KEY_FILE_MODE))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_owner_only(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
