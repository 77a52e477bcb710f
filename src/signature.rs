use crate::reader::{read_u16, ByteOrder};
use crate::types::SupportedFormat;

pub const SIGNATURE_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Format(SupportedFormat),
    Unsupported,
    NeedMoreData,
}

/// Classifies a buffer by its leading two bytes.
///
/// Only the magic is checked here. Deeper structural checks, such as the
/// JFIF marker sequence, belong to the per-format extractors.
pub fn classify(data: &[u8]) -> Classification {
    if data.len() < SIGNATURE_LEN {
        return Classification::NeedMoreData;
    }

    let Some(magic) = read_u16(data, 0, ByteOrder::Big) else {
        return Classification::NeedMoreData;
    };

    match SupportedFormat::from_magic(magic) {
        Some(format) => Classification::Format(format),
        None => Classification::Unsupported,
    }
}
