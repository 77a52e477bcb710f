use std::fmt;

use serde::{Deserialize, Serialize};

pub const JPEG_MAGIC: u16 = 0xFFD8;
pub const PNG_MAGIC: u16 = 0x8950;
pub const GIF_MAGIC: u16 = 0x4749;
pub const BMP_MAGIC: u16 = 0x424D;

pub const PNG_MIN_SAMPLE: usize = 25;
pub const GIF_MIN_SAMPLE: usize = 11;
pub const BMP_MIN_SAMPLE: usize = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
}

impl SupportedFormat {
    pub const ALL: [SupportedFormat; 4] = [
        SupportedFormat::Jpeg,
        SupportedFormat::Png,
        SupportedFormat::Gif,
        SupportedFormat::Bmp,
    ];

    /// Buffer length at or below which an extraction attempt is pointless.
    ///
    /// JPEG headers are variable length, so the segment scanner decides
    /// sufficiency on its own and no minimum is defined.
    pub const fn minimum_sample(self) -> Option<usize> {
        match self {
            SupportedFormat::Jpeg => None,
            SupportedFormat::Png => Some(PNG_MIN_SAMPLE),
            SupportedFormat::Gif => Some(GIF_MIN_SAMPLE),
            SupportedFormat::Bmp => Some(BMP_MIN_SAMPLE),
        }
    }

    /// Leading two bytes, read big-endian.
    pub const fn magic(self) -> u16 {
        match self {
            SupportedFormat::Jpeg => JPEG_MAGIC,
            SupportedFormat::Png => PNG_MAGIC,
            SupportedFormat::Gif => GIF_MAGIC,
            SupportedFormat::Bmp => BMP_MAGIC,
        }
    }

    pub const fn from_magic(magic: u16) -> Option<Self> {
        match magic {
            JPEG_MAGIC => Some(SupportedFormat::Jpeg),
            PNG_MAGIC => Some(SupportedFormat::Png),
            GIF_MAGIC => Some(SupportedFormat::Gif),
            BMP_MAGIC => Some(SupportedFormat::Bmp),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SupportedFormat::Jpeg => "jpg",
            SupportedFormat::Png => "png",
            SupportedFormat::Gif => "gif",
            SupportedFormat::Bmp => "bmp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            SupportedFormat::Jpeg => "image/jpeg",
            SupportedFormat::Png => "image/png",
            SupportedFormat::Gif => "image/gif",
            SupportedFormat::Bmp => "image/bmp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupportedFormat::Jpeg => "JPEG",
            SupportedFormat::Png => "PNG",
            SupportedFormat::Gif => "GIF",
            SupportedFormat::Bmp => "BMP",
        }
    }
}

impl fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the BMP height field is read from.
///
/// `MirrorWidth` reads height from the width field's own offset, which is
/// how older consumers of this decoder saw BMP heights. `Corrected` reads the
/// field that actually follows width in the DIB header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BmpHeightPolicy {
    #[default]
    Corrected,
    MirrorWidth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedImageInfo {
    pub format: SupportedFormat,
    pub width: u32,
    pub height: u32,
    pub source: String,
    pub bytes_examined: usize,
}

impl DecodedImageInfo {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for DecodedImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} ({} bytes examined)",
            self.format, self.width, self.height, self.bytes_examined
        )
    }
}

/// Result of a single decode attempt against one buffer.
///
/// `Unsupported` is terminal: the bytes that decided it are already present,
/// so a longer prefix cannot change the answer. `NeedMoreData` asks the
/// caller to retry with a larger prefix of the same source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(DecodedImageInfo),
    NeedMoreData { format: Option<SupportedFormat> },
    Unsupported,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NeedMoreData { .. })
    }

    pub fn format(&self) -> Option<SupportedFormat> {
        match self {
            Outcome::Found(info) => Some(info.format),
            Outcome::NeedMoreData { format } => *format,
            Outcome::Unsupported => None,
        }
    }

    pub fn info(&self) -> Option<&DecodedImageInfo> {
        match self {
            Outcome::Found(info) => Some(info),
            _ => None,
        }
    }

    pub fn into_info(self) -> Option<DecodedImageInfo> {
        match self {
            Outcome::Found(info) => Some(info),
            _ => None,
        }
    }
}
