use tracing::debug;

use crate::extract::{extract_with, Extraction};
use crate::signature::{classify, Classification};
use crate::types::{BmpHeightPolicy, DecodedImageInfo, Outcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    pub bmp_height: BmpHeightPolicy,
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bmp_height(mut self, policy: BmpHeightPolicy) -> Self {
        self.bmp_height = policy;
        self
    }
}

/// Stateless format and dimension decoder.
///
/// Holds only options, so a single instance can be shared freely across
/// threads and reused for any number of buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn decode(&self, source: &str, data: &[u8]) -> Outcome {
        let format = match classify(data) {
            Classification::Format(format) => format,
            Classification::NeedMoreData => {
                debug!(source, len = data.len(), "too short to classify");
                return Outcome::NeedMoreData { format: None };
            }
            Classification::Unsupported => {
                debug!(source, len = data.len(), "unrecognised signature");
                return Outcome::Unsupported;
            }
        };

        match extract_with(format, data, self.options.bmp_height) {
            Extraction::Found {
                width,
                height,
                bytes_examined,
            } => {
                debug!(source, %format, width, height, bytes_examined, "dimensions found");
                Outcome::Found(DecodedImageInfo {
                    format,
                    width,
                    height,
                    source: source.to_owned(),
                    bytes_examined,
                })
            }
            Extraction::NeedMoreData => {
                debug!(source, %format, len = data.len(), "need more data");
                Outcome::NeedMoreData {
                    format: Some(format),
                }
            }
            Extraction::Unsupported => {
                debug!(source, %format, "structural check failed");
                Outcome::Unsupported
            }
        }
    }
}

/// Decodes with default options.
pub fn decode(source: &str, data: &[u8]) -> Outcome {
    Decoder::default().decode(source, data)
}
