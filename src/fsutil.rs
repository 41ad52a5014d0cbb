use std::io;
use std::path::{Path, PathBuf};

/// Error that occurs when reading a file as text fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to read file `{path}`: {source}")]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Reads the file at the given path into a whitespace-trimmed string.
///
/// # Errors
///
/// Returns a [`FileReadError`] if the file cannot be opened or read.
///
/// # Example
/// ```no_run
/// # use hostfacts::fsutil;
/// let hostname = fsutil::read_trimmed("/etc/hostname")?;
/// # Ok::<(), fsutil::FileReadError>(())
/// ```
pub fn read_trimmed(path: impl AsRef<Path>) -> Result<String, FileReadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.trim().to_owned())
}
