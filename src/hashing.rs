use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use blake3::{Hash, Hasher};

use crate::error::CleanError;

/// Size of the buffer used when streaming file contents into the hasher.
const CHUNK_SIZE: usize = 64 * 1024;

/// Computes the BLAKE3 digest of a file by streaming it in fixed-size chunks.
///
/// The file is never loaded into memory as a whole, so arbitrarily large
/// files can be hashed with a constant memory footprint. Symbolic links and
/// directories are rejected.
///
/// # Arguments
///
/// * `path` - Path to the file to hash
///
/// # Returns
///
/// The BLAKE3 digest of the file's contents.
///
/// # Errors
///
/// Returns [`CleanError::Unreadable`] if the file cannot be opened or read
/// (permission denied, vanished file), and [`CleanError::InvalidFileType`]
/// for symbolic links and directories.
pub fn hash_file(path: &Path) -> Result<Hash, CleanError> {
    // Check for symlinks before opening
    let metadata = std::fs::symlink_metadata(path).map_err(|source| CleanError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_symlink() {
        return Err(CleanError::InvalidFileType {
            path: path.to_path_buf(),
            message: "Symbolic links are not supported".to_string(),
        });
    }

    if metadata.is_dir() {
        return Err(CleanError::InvalidFileType {
            path: path.to_path_buf(),
            message: "Directories are not supported".to_string(),
        });
    }

    let mut file = File::open(path).map_err(|source| CleanError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(CleanError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        hasher.update(&buffer[..read]);
    }

    Ok(hasher.finalize())
}
