//! Per-file inspection and text/JSON rendering.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ReadError;
use crate::exif::{self, ExifEntries, ExifOutcome};
use crate::metadata::{self, FileMetadata};

/// Width of the key column in text output.
const KEY_WIDTH: usize = 20;
/// Length of the dashed rule between blocks.
const RULE_WIDTH: usize = 50;

/// Message printed in place of EXIF rows when an image has no EXIF block.
pub const NO_EXIF_MESSAGE: &str = "No EXIF data found in this image.";

/// Image formats accepted for inspection, determined by file name suffix only.
///
/// # Example
///
/// ```rust
/// use scorpion::report::ImageKind;
/// use std::path::Path;
///
/// assert_eq!(ImageKind::from_path(Path::new("IMG_0001.JPG")), Some(ImageKind::Jpeg));
/// assert_eq!(ImageKind::from_path(Path::new("scan.tif")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Jpeg,
    Png,
    Tiff,
}

impl ImageKind {
    /// Determine the image kind from the suffix of the file name.
    ///
    /// A bare `.jpg` counts: the whole name is matched, not just what
    /// [`Path::extension`] reports.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Some(Self::Jpeg)
        } else if name.ends_with(".png") {
            Some(Self::Png)
        } else if name.ends_with(".tiff") {
            Some(Self::Tiff)
        } else {
            None
        }
    }
}

/// What happened when a path was inspected.
#[derive(Debug)]
pub enum Inspection {
    /// The path is not an existing regular file.
    NotAFile,
    /// The extension is not one of the accepted image formats.
    UnsupportedFormat,
    /// Metadata and EXIF were read (each may have failed on its own).
    Inspected {
        kind: ImageKind,
        metadata: Result<FileMetadata, ReadError>,
        exif: ExifOutcome,
    },
}

/// The full result of inspecting one path.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub inspection: Inspection,
}

/// Inspect a single path: validate it, then read its metadata and EXIF block.
///
/// Never fails; every problem is recorded in the returned report.
pub fn inspect(path: &Path) -> FileReport {
    let inspection = if !path.is_file() {
        log::debug!("{} is not a regular file", path.display());
        Inspection::NotAFile
    } else {
        match ImageKind::from_path(path) {
            None => Inspection::UnsupportedFormat,
            Some(kind) => Inspection::Inspected {
                kind,
                metadata: metadata::read_file_metadata(path),
                exif: exif::read_exif(path),
            },
        }
    };

    FileReport {
        path: path.to_path_buf(),
        inspection,
    }
}

/// Inspect a path and render the report as text lines.
///
/// # Example
///
/// ```rust,no_run
/// use scorpion::report::display_metadata;
/// use std::path::Path;
///
/// for line in display_metadata(Path::new("photo.jpg")) {
///     println!("{line}");
/// }
/// ```
pub fn display_metadata(path: &Path) -> Vec<String> {
    inspect(path).lines()
}

impl FileReport {
    /// `true` if the file could not be fully inspected.
    ///
    /// A missing EXIF block is not a failure.
    pub fn is_failure(&self) -> bool {
        match &self.inspection {
            Inspection::NotAFile | Inspection::UnsupportedFormat => true,
            Inspection::Inspected { metadata, exif, .. } => {
                metadata.is_err() || exif.is_failure()
            }
        }
    }

    /// Render as human-readable text lines.
    pub fn lines(&self) -> Vec<String> {
        let path = self.path.display();
        let (metadata, exif) = match &self.inspection {
            Inspection::NotAFile => return vec![format!("Error: {path} is not a valid file.")],
            Inspection::UnsupportedFormat => return vec![format!("Invalid file format: {path}")],
            Inspection::Inspected { metadata, exif, .. } => (metadata, exif),
        };

        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = vec![
            String::new(),
            format!("--- Metadata for {path} ---"),
            rule.clone(),
            "File Information:".to_string(),
        ];

        match metadata {
            Ok(meta) => {
                for (key, value) in meta.rows() {
                    lines.push(row(key, &value));
                }
            }
            Err(e) => lines.push(row("Error", &format!("Error retrieving file metadata: {e}"))),
        }
        lines.push(rule.clone());

        lines.push(rule.clone());
        lines.push("EXIF Information:".to_string());
        match exif {
            ExifOutcome::Entries(entries) => {
                for (key, value) in entries.iter() {
                    lines.push(row(key, value));
                }
            }
            ExifOutcome::Absent => lines.push(row("Error", NO_EXIF_MESSAGE)),
            ExifOutcome::Failed(e) => lines.push(row("Error", &format!("Error reading EXIF data: {e}"))),
        }
        lines.push(rule);

        lines
    }

    /// Structured view for JSON output.
    pub fn to_json(&self) -> JsonReport<'_> {
        let mut report = JsonReport {
            path: self.path.display().to_string(),
            status: "ok",
            kind: None,
            metadata: None,
            metadata_error: None,
            exif: None,
            exif_absent: false,
            exif_error: None,
        };

        match &self.inspection {
            Inspection::NotAFile => report.status = "not_a_file",
            Inspection::UnsupportedFormat => report.status = "unsupported_format",
            Inspection::Inspected { kind, metadata, exif } => {
                report.kind = Some(*kind);
                match metadata {
                    Ok(meta) => report.metadata = Some(meta),
                    Err(e) => report.metadata_error = Some(JsonError::from(e)),
                }
                match exif {
                    ExifOutcome::Entries(entries) => report.exif = Some(entries),
                    ExifOutcome::Absent => report.exif_absent = true,
                    ExifOutcome::Failed(e) => report.exif_error = Some(JsonError::from(e)),
                }
            }
        }

        report
    }
}

/// JSON shape of a [`FileReport`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub path: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ImageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a FileMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_error: Option<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif: Option<&'a ExifEntries>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exif_absent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif_error: Option<JsonError>,
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub kind: &'static str,
    pub message: String,
}

impl From<&ReadError> for JsonError {
    fn from(e: &ReadError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

fn row(key: &str, value: &str) -> String {
    format!("{key:<KEY_WIDTH$}: {value}")
}
