use crate::formats::{bmp, gif, jpeg, png};
use crate::types::{BmpHeightPolicy, SupportedFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Found {
        width: u32,
        height: u32,
        bytes_examined: usize,
    },
    NeedMoreData,
    Unsupported,
}

pub fn extract(format: SupportedFormat, data: &[u8]) -> Extraction {
    extract_with(format, data, BmpHeightPolicy::default())
}

pub fn extract_with(
    format: SupportedFormat,
    data: &[u8],
    bmp_height: BmpHeightPolicy,
) -> Extraction {
    if format
        .minimum_sample()
        .is_some_and(|minimum| data.len() <= minimum)
    {
        return Extraction::NeedMoreData;
    }

    match format {
        SupportedFormat::Jpeg => jpeg::dimensions(data),
        SupportedFormat::Png => png::dimensions(data),
        SupportedFormat::Gif => gif::dimensions(data),
        SupportedFormat::Bmp => bmp::dimensions(data, bmp_height),
    }
}
