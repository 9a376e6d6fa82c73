// src/document/file.rs

use crate::error::LevelError;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sibling of `path` the text is staged in before the rename.
fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name")
    })?;
    let mut staged = name.to_os_string();
    staged.push(".tmp");
    Ok(path.with_file_name(staged))
}

fn write_staged(staged: &Path, text: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(staged)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

/// Writes finished level text to `path`.
///
/// The parent directory must already exist; it is never created here. The text
/// goes to a sibling `.tmp` file first and is renamed over `path` only once it
/// is fully flushed, so a failed write never leaves a truncated map behind.
pub fn write_level_text(path: &Path, text: &str) -> Result<(), LevelError> {
    let resource_err = |source| LevelError::Resource {
        path: path.to_path_buf(),
        source,
    };

    let staged = staging_path(path).map_err(resource_err)?;
    if let Err(e) = write_staged(&staged, text).and_then(|()| fs::rename(&staged, path)) {
        if staged.exists() {
            if let Err(cleanup) = fs::remove_file(&staged) {
                warn!("Could not remove {}: {}", staged.display(), cleanup);
            }
        }
        return Err(resource_err(e));
    }

    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
