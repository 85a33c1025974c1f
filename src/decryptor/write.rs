//! src/decryptor/write.rs
//! All-or-nothing plaintext persistence

use crate::error::EnvelopeError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write `plaintext` to `destination` atomically.
///
/// The bytes go to a temporary file in the destination's directory, are synced,
/// and are renamed over `destination` only once complete. On any error the
/// temporary file is removed and `destination` is left exactly as it was.
/// Missing parent directories are created.
pub fn persist_plaintext(destination: &Path, plaintext: &[u8]) -> Result<(), EnvelopeError> {
    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(plaintext)?;
    staged.as_file().sync_all()?;
    staged
        .persist(destination)
        .map_err(|e| EnvelopeError::Io(e.error))?;

    debug!(path = %destination.display(), bytes = plaintext.len(), "plaintext persisted");
    Ok(())
}
