//! EXIF reading.
//!
//! [`read_exif`] decodes the embedded EXIF block of an image into an ordered
//! list of tag/value pairs. The result is an [`ExifOutcome`], which keeps
//! "no EXIF block" apart from "decoding failed".

mod reader;

pub use reader::read_exif;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ReadError;

/// Ordered tag name → rendered value pairs.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifEntries {
    entries: Vec<(String, String)>,
}

impl ExifEntries {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ExifEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Result of looking up the EXIF block of an image.
#[derive(Debug)]
pub enum ExifOutcome {
    /// The block was decoded.
    Entries(ExifEntries),
    /// The image carries no EXIF block (or an empty one).
    Absent,
    /// The block could not be decoded.
    Failed(ReadError),
}

impl ExifOutcome {
    pub fn entries(&self) -> Option<&ExifEntries> {
        match self {
            Self::Entries(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
