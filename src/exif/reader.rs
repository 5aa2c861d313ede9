use nom_exif::{EntryValue, ExifIter, MediaParser, MediaSource};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{ExifEntries, ExifOutcome};
use crate::error::ReadError;

// IFD1 holds the embedded thumbnail's tags
const THUMBNAIL_IFD: usize = 1;

/// Read the EXIF block of an image file.
///
/// nom-exif is tried first. If it yields nothing (unrecognised container such
/// as PNG, missing or broken Exif segment), kamadak-exif reads the file
/// again and its error decides between [`ExifOutcome::Absent`] and
/// [`ExifOutcome::Failed`].
pub fn read_exif(path: &Path) -> ExifOutcome {
    match read_with_nom_exif(path) {
        Ok(entries) if !entries.is_empty() => return ExifOutcome::Entries(entries),
        Ok(_) => log::debug!("nom-exif found no entries in {}", path.display()),
        Err(e) => log::debug!("nom-exif could not read {}: {e}", path.display()),
    }

    read_with_kamadak(path)
}

fn read_with_nom_exif(path: &Path) -> nom_exif::Result<ExifEntries> {
    let mut parser = MediaParser::new();
    let ms = MediaSource::file_path(path)?;
    if !ms.has_exif() {
        return Ok(ExifEntries::default());
    }

    let iter: ExifIter = parser.parse(ms)?;
    let mut entries = ExifEntries::default();

    for entry in iter {
        if entry.ifd_index() == THUMBNAIL_IFD {
            continue;
        }

        let key = match entry.tag() {
            // variant names are the tag names
            Some(tag) => format!("{tag:?}"),
            None => entry.tag_code().to_string(),
        };

        match entry.get_value() {
            Some(value) => entries.insert(key, entry_to_string(value)),
            None => log::debug!("Skipping undecodable tag {key} in {}", path.display()),
        }
    }

    Ok(entries)
}

fn read_with_kamadak(path: &Path) -> ExifOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return ExifOutcome::Failed(ReadError::from_io(path, e)),
    };
    let mut reader = BufReader::new(file);

    let exif = match kamadak_exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(kamadak_exif::Error::NotFound(container)) => {
            log::debug!("No Exif block in {container} file {}", path.display());
            return ExifOutcome::Absent;
        }
        Err(kamadak_exif::Error::Io(e)) => return ExifOutcome::Failed(ReadError::from_io(path, e)),
        Err(kamadak_exif::Error::InvalidFormat(reason)) if reason == "Unknown image format" => {
            return ExifOutcome::Failed(ReadError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            });
        }
        Err(e) => return ExifOutcome::Failed(ReadError::decode(path, e.to_string())),
    };

    let mut entries = ExifEntries::default();
    for field in exif.fields() {
        if field.ifd_num != kamadak_exif::In::PRIMARY {
            continue;
        }
        let key = match field.tag.description() {
            Some(_) => field.tag.to_string(),
            None => field.tag.number().to_string(),
        };
        let value = field.display_value().with_unit(&exif).to_string();
        entries.insert(key, clean_value(&value));
    }

    if entries.is_empty() {
        ExifOutcome::Absent
    } else {
        ExifOutcome::Entries(entries)
    }
}

/// Render an EntryValue for display.
fn entry_to_string(val: &EntryValue) -> String {
    clean_value(&val.to_string())
}

fn clean_value(s: &str) -> String {
    s.trim().trim_matches(|c: char| c == '"' || c == '\0').trim().to_string()
}
