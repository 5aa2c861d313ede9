//! Error kinds for reading file metadata and EXIF data.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed decoder error carried as the cause of a [`ReadError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a file's metadata or EXIF block could not be read.
///
/// Every variant keeps the path it refers to and, where one exists, the
/// original cause as its [`source`](std::error::Error::source).
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file does not exist (or vanished between checks).
    #[error("{}: no such file", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The process is not allowed to read the file.
    #[error("{}: permission denied", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The container is not one any EXIF decoder understands.
    #[error("{}: unsupported image format ({reason})", path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// The container was recognised but its EXIF block could not be decoded.
    #[error("{}: {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Any other I/O failure.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// Classify an I/O error by its kind.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Wrap a decoder error.
    pub fn decode<E>(path: &Path, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::DecodeFailure {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Short machine-readable name of the kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::DecodeFailure { .. } => "decode_failure",
            Self::Io { .. } => "io",
        }
    }
}
