use crate::extract::Extraction;
use crate::reader::{read_u16, ByteOrder};

const WIDTH_OFFSET: usize = 6;
const HEIGHT_OFFSET: usize = 8;

/// Logical screen descriptor width and height, both little-endian.
pub fn dimensions(data: &[u8]) -> Extraction {
    let (Some(width), Some(height)) = (
        read_u16(data, WIDTH_OFFSET, ByteOrder::Little),
        read_u16(data, HEIGHT_OFFSET, ByteOrder::Little),
    ) else {
        return Extraction::NeedMoreData;
    };

    Extraction::Found {
        width: width as u32,
        height: height as u32,
        bytes_examined: HEIGHT_OFFSET + 2,
    }
}
