//! Minimal image byte streams for tests.

pub const TAG_MODEL: u16 = 0x0110;
const TYPE_ASCII: u16 = 2;

/// One IFD entry: tag, field type, value count, and raw value bytes.
pub struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    bytes: Vec<u8>,
}

/// NUL-terminated ASCII entry.
pub fn ascii(tag: u16, text: &str) -> Entry {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    Entry {
        tag,
        kind: TYPE_ASCII,
        count: bytes.len() as u32,
        bytes,
    }
}

/// Big-endian TIFF with the given IFD chain (IFD0 first, then IFD1, ...).
///
/// Values longer than four bytes are stored right after their IFD.
pub fn tiff_with_ifds(ifds: &[Vec<Entry>]) -> Vec<u8> {
    let mut data = Vec::new();
    // Header: byte order, magic, IFD0 offset.
    data.extend_from_slice(b"MM");
    data.extend_from_slice(&42u16.to_be_bytes());
    data.extend_from_slice(&8u32.to_be_bytes());

    for (i, ifd) in ifds.iter().enumerate() {
        let ifd_start = data.len();
        let table_len = 2 + 12 * ifd.len() + 4;
        let mut table = Vec::new();
        let mut extra = Vec::new();

        table.extend_from_slice(&(ifd.len() as u16).to_be_bytes());
        for entry in ifd {
            table.extend_from_slice(&entry.tag.to_be_bytes());
            table.extend_from_slice(&entry.kind.to_be_bytes());
            table.extend_from_slice(&entry.count.to_be_bytes());
            if entry.bytes.len() <= 4 {
                let mut inline = entry.bytes.clone();
                inline.resize(4, 0);
                table.extend_from_slice(&inline);
            } else {
                let offset = (ifd_start + table_len + extra.len()) as u32;
                table.extend_from_slice(&offset.to_be_bytes());
                extra.extend_from_slice(&entry.bytes);
                if extra.len() % 2 == 1 {
                    extra.push(0);
                }
            }
        }

        let next = if i + 1 < ifds.len() {
            (ifd_start + table_len + extra.len()) as u32
        } else {
            0
        };
        table.extend_from_slice(&next.to_be_bytes());

        data.extend_from_slice(&table);
        data.extend_from_slice(&extra);
    }
    data
}

/// TIFF with a single IFD0 entry: `Model = model`.
pub fn tiff_with_model(model: &str) -> Vec<u8> {
    tiff_with_ifds(&[vec![ascii(TAG_MODEL, model)]])
}

/// JPEG whose APP1 segment carries [`tiff_with_model`].
pub fn jpeg_with_model(model: &str) -> Vec<u8> {
    let tiff = tiff_with_model(model);

    let mut data = Vec::new();
    data.extend_from_slice(&[0xFF, 0xD8]);

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);
    data.extend_from_slice(&[0xFF, 0xE1]);
    data.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    data.extend_from_slice(&payload);

    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

/// JPEG with a JFIF APP0 segment and no Exif.
pub fn jpeg_without_exif() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0xFF, 0xD8]);
    data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

/// 1x1 grayscale PNG with no eXIf chunk.
pub fn png_without_exif() -> Vec<u8> {
    png(None)
}

/// 1x1 grayscale PNG whose eXIf chunk holds `tiff`.
pub fn png_with_exif(tiff: &[u8]) -> Vec<u8> {
    png(Some(tiff))
}

fn png(exif: Option<&[u8]>) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&[8, 0, 0, 0, 0]);
    push_chunk(&mut data, b"IHDR", &ihdr);
    if let Some(tiff) = exif {
        push_chunk(&mut data, b"eXIf", tiff);
    }
    push_chunk(&mut data, b"IEND", &[]);
    data
}

fn push_chunk(data: &mut Vec<u8>, kind: &[u8; 4], body: &[u8]) {
    data.extend_from_slice(&(body.len() as u32).to_be_bytes());
    let start = data.len();
    data.extend_from_slice(kind);
    data.extend_from_slice(body);
    let crc = crc32(&data[start..]);
    data.extend_from_slice(&crc.to_be_bytes());
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iend_crc_matches_known_value() {
        assert_eq!(crc32(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn single_entry_tiff_layout() {
        let tiff = tiff_with_model("Canon");
        // header (8) + count (2) + entry (12) + next IFD (4) + "Canon\0"
        assert_eq!(tiff.len(), 26 + 6);
        assert_eq!(&tiff[18..22], &26u32.to_be_bytes());
        assert_eq!(&tiff[22..26], &[0, 0, 0, 0]);
    }

    #[test]
    fn chained_ifds_link_forward() {
        let tiff = tiff_with_ifds(&[
            vec![ascii(TAG_MODEL, "Main")],
            vec![ascii(TAG_MODEL, "Thumb")],
        ]);
        // IFD0 value "Main\0" is out of line and padded to 6 bytes
        let next = u32::from_be_bytes([tiff[22], tiff[23], tiff[24], tiff[25]]);
        assert_eq!(next, 26 + 6);
        assert_eq!(&tiff[32..34], &1u16.to_be_bytes());
    }
}
