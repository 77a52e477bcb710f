use tracing::trace;

use crate::extract::Extraction;
use crate::reader::{match_prefix, read_u16, read_u8, ByteOrder};

/// SOI immediately followed by an APP0 marker.
pub const JPEG_SOI_APP0: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
pub const JFIF_IDENTIFIER: &[u8; 5] = b"JFIF\x00";

pub const MARKER_PREFIX: u8 = 0xFF;
pub const SOF0: u8 = 0xC0;
pub const SOF3: u8 = 0xC3;

const APP0_LENGTH_OFFSET: usize = 4;
const JFIF_OFFSET: usize = 6;

// Relative to the 0xFF that opens a SOF segment:
// FF Cn | len(2) | precision(1) | height(2) | width(2)
const SOF_HEIGHT_OFFSET: usize = 5;
const SOF_WIDTH_OFFSET: usize = 7;
const SOF_FIELDS_END: usize = 9;

#[inline]
pub fn is_dimension_marker(marker: u8) -> bool {
    (SOF0..=SOF3).contains(&marker)
}

/// Walks the segment chain of a JFIF stream until a baseline, extended,
/// lossless or progressive frame header turns up.
///
/// A cursor that lands past the end of the buffer, or on a byte that is not
/// a marker prefix, is read as truncation rather than corruption. Only the
/// SOI/APP0 prefix and the JFIF identifier can make a stream unsupported.
pub fn dimensions(data: &[u8]) -> Extraction {
    match match_prefix(data, 0, &JPEG_SOI_APP0) {
        Some(true) => {}
        Some(false) => return Extraction::Unsupported,
        None => return Extraction::NeedMoreData,
    }

    match match_prefix(data, JFIF_OFFSET, JFIF_IDENTIFIER) {
        Some(true) => {}
        Some(false) => return Extraction::Unsupported,
        None => return Extraction::NeedMoreData,
    }

    let Some(app0_len) = read_u16(data, APP0_LENGTH_OFFSET, ByteOrder::Big) else {
        return Extraction::NeedMoreData;
    };

    let mut pos = APP0_LENGTH_OFFSET + app0_len as usize;

    loop {
        let Some(prefix) = read_u8(data, pos) else {
            return Extraction::NeedMoreData;
        };
        if prefix != MARKER_PREFIX {
            trace!(offset = pos, byte = prefix, "expected marker prefix");
            return Extraction::NeedMoreData;
        }

        let Some(marker) = read_u8(data, pos + 1) else {
            return Extraction::NeedMoreData;
        };

        if is_dimension_marker(marker) {
            let (Some(height), Some(width)) = (
                read_u16(data, pos + SOF_HEIGHT_OFFSET, ByteOrder::Big),
                read_u16(data, pos + SOF_WIDTH_OFFSET, ByteOrder::Big),
            ) else {
                return Extraction::NeedMoreData;
            };

            trace!(offset = pos, marker, width, height, "frame header");
            return Extraction::Found {
                width: width as u32,
                height: height as u32,
                bytes_examined: pos + SOF_FIELDS_END,
            };
        }

        let Some(seg_len) = read_u16(data, pos + 2, ByteOrder::Big) else {
            return Extraction::NeedMoreData;
        };

        // A length below 2 lands the cursor on its own length bytes, which
        // the prefix check above then reports as truncation.
        trace!(offset = pos, marker, seg_len, "skipping segment");
        pos += 2 + seg_len as usize;
    }
}
