//! Filesystem attributes of an image file.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::ReadError;

/// Filesystem attributes of an image file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileMetadata {
    /// Final path component.
    pub name: String,
    /// Length of the file in bytes.
    pub size_bytes: u64,
    /// Seconds since the Unix epoch, fractional.
    ///
    /// This is the status-change time (`st_ctime`) on Unix, which is not a
    /// true creation time on most filesystems. Other platforms report the
    /// birth time.
    pub creation_timestamp: f64,
}

impl FileMetadata {
    /// Labeled rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("File Name", self.name.clone()),
            ("File Size (bytes)", self.size_bytes.to_string()),
            // Debug keeps the decimal point on whole seconds
            ("Creation Date", format!("{:?}", self.creation_timestamp)),
        ]
    }
}

/// Read name, size, and creation time for a file.
pub fn read_file_metadata(path: &Path) -> Result<FileMetadata, ReadError> {
    let meta = fs::metadata(path).map_err(|e| ReadError::from_io(path, e))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileMetadata {
        name,
        size_bytes: meta.len(),
        creation_timestamp: creation_timestamp(path, &meta)?,
    })
}

#[cfg(unix)]
fn creation_timestamp(_path: &Path, meta: &fs::Metadata) -> Result<f64, ReadError> {
    use std::os::unix::fs::MetadataExt;

    Ok(meta.ctime() as f64 + meta.ctime_nsec() as f64 / 1e9)
}

#[cfg(not(unix))]
fn creation_timestamp(path: &Path, meta: &fs::Metadata) -> Result<f64, ReadError> {
    use std::time::UNIX_EPOCH;

    let created = meta.created().map_err(|e| ReadError::from_io(path, e))?;
    let secs = match created.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    };
    Ok(secs)
}
