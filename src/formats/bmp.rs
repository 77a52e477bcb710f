use crate::extract::Extraction;
use crate::reader::{read_i32, read_u16, read_u32, ByteOrder};
use crate::types::BmpHeightPolicy;

const DIB_SIZE_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;

/// BITMAPCOREHEADER, the OS/2 1.x layout with 16-bit dimensions.
pub const CORE_HEADER_SIZE: u32 = 12;

pub fn dimensions(data: &[u8], policy: BmpHeightPolicy) -> Extraction {
    let Some(dib_size) = read_u32(data, DIB_SIZE_OFFSET, ByteOrder::Little) else {
        return Extraction::NeedMoreData;
    };

    let read = if dib_size == CORE_HEADER_SIZE {
        core_header(data, policy)
    } else {
        info_header(data, policy)
    };

    match read {
        Some((width, height, bytes_examined)) => Extraction::Found {
            width,
            height,
            bytes_examined,
        },
        None => Extraction::NeedMoreData,
    }
}

fn core_header(data: &[u8], policy: BmpHeightPolicy) -> Option<(u32, u32, usize)> {
    let width = read_u16(data, WIDTH_OFFSET, ByteOrder::Little)?;
    let height_offset = match policy {
        BmpHeightPolicy::Corrected => WIDTH_OFFSET + 2,
        BmpHeightPolicy::MirrorWidth => WIDTH_OFFSET,
    };
    let height = read_u16(data, height_offset, ByteOrder::Little)?;
    Some((width as u32, height as u32, height_offset + 2))
}

// Both dimensions are signed in every header newer than the core one. A
// negative height means the rows are stored top-down. Only the magnitude is
// a dimension.
fn info_header(data: &[u8], policy: BmpHeightPolicy) -> Option<(u32, u32, usize)> {
    let width = read_i32(data, WIDTH_OFFSET, ByteOrder::Little)?.unsigned_abs();
    match policy {
        BmpHeightPolicy::Corrected => {
            let height_offset = WIDTH_OFFSET + 4;
            let height = read_i32(data, height_offset, ByteOrder::Little)?;
            Some((width, height.unsigned_abs(), height_offset + 4))
        }
        BmpHeightPolicy::MirrorWidth => Some((width, width, WIDTH_OFFSET + 4)),
    }
}
