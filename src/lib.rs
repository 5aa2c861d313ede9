//! # scorpion
//!
//! Print file metadata (name, size, creation time) and EXIF tags for JPEG,
//! PNG, and TIFF images.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scorpion::report::display_metadata;
//! use std::path::Path;
//!
//! for line in display_metadata(Path::new("photo.jpg")) {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The readers can be called on their own. Neither panics; failures come back
//! as values.
//!
//! ```rust,no_run
//! use scorpion::exif::{read_exif, ExifOutcome};
//! use scorpion::metadata::read_file_metadata;
//! use std::path::Path;
//!
//! let path = Path::new("photo.jpg");
//!
//! match read_file_metadata(path) {
//!     Ok(meta) => println!("{} is {} bytes", meta.name, meta.size_bytes),
//!     Err(e) => eprintln!("{e}"),
//! }
//!
//! match read_exif(path) {
//!     ExifOutcome::Entries(entries) => println!("Camera: {:?}", entries.get("Model")),
//!     ExifOutcome::Absent => println!("no EXIF block"),
//!     ExifOutcome::Failed(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Output configuration and loading/saving
//! - [`error`] — Error kinds for metadata and EXIF reads
//! - [`exif`] — EXIF reading
//! - [`metadata`] — Filesystem attributes
//! - [`report`] — Path validation, inspection, and text/JSON rendering

pub mod config;
pub mod error;
pub mod exif;
pub mod metadata;
pub mod report;

#[cfg(test)]
mod testkit;
