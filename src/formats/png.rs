use crate::extract::Extraction;
use crate::reader::{read_u32, ByteOrder};

const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

/// Reads the IHDR width and height. Only the two-byte signature has been
/// checked at this point; the chunk layout is taken on trust.
pub fn dimensions(data: &[u8]) -> Extraction {
    let (Some(width), Some(height)) = (
        read_u32(data, WIDTH_OFFSET, ByteOrder::Big),
        read_u32(data, HEIGHT_OFFSET, ByteOrder::Big),
    ) else {
        return Extraction::NeedMoreData;
    };

    Extraction::Found {
        width,
        height,
        bytes_examined: HEIGHT_OFFSET + 4,
    }
}
