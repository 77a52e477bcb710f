use std::path::Path;

use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::decoder::Decoder;
use crate::error::{ProbeError, Result};
use crate::source::{ByteSource, FileSource, MemorySource};
use crate::types::{DecodedImageInfo, Outcome};

/// Drives a [`Decoder`] against a [`ByteSource`], growing the fetched prefix
/// geometrically until the decoder answers or a ceiling is reached.
#[derive(Debug, Clone)]
pub struct Prober {
    config: ProbeConfig,
    decoder: Decoder,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl Prober {
    pub fn new(config: ProbeConfig) -> Self {
        let decoder = Decoder::new(config.decoder_options());
        Self { config, decoder }
    }

    pub fn try_new(config: ProbeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn probe<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<DecodedImageInfo> {
        let mut buf = BytesMut::with_capacity(self.config.initial_bytes);
        let mut want = self.config.initial_bytes.min(self.config.max_bytes);
        let mut attempts = 0u32;

        loop {
            let before = buf.len();
            let appended = source.fill(&mut buf, want)?;
            let ended = before + appended < want;
            attempts += 1;

            debug!(source = source.id(), attempt = attempts, len = buf.len(), "decode attempt");

            match self.decoder.decode(source.id(), &buf) {
                Outcome::Found(info) => return Ok(info),
                Outcome::Unsupported => {
                    return Err(ProbeError::Unsupported {
                        source_id: source.id().to_owned(),
                    });
                }
                Outcome::NeedMoreData { .. } => {}
            }

            if ended {
                warn!(source = source.id(), bytes = buf.len(), "source ended before dimensions");
                return Err(ProbeError::Truncated {
                    source_id: source.id().to_owned(),
                    bytes: buf.len(),
                });
            }

            if want >= self.config.max_bytes || attempts >= self.config.max_attempts {
                warn!(
                    source = source.id(),
                    bytes = buf.len(),
                    attempts,
                    "giving up on probe"
                );
                return Err(ProbeError::Exhausted {
                    source_id: source.id().to_owned(),
                    bytes: buf.len(),
                    attempts,
                });
            }

            want = want
                .saturating_mul(self.config.growth_factor)
                .min(self.config.max_bytes);
        }
    }

    pub fn probe_path(&self, path: impl AsRef<Path>) -> Result<DecodedImageInfo> {
        let mut source = FileSource::open(path)?;
        self.probe(&mut source)
    }

    pub fn probe_bytes(&self, id: &str, data: impl Into<Bytes>) -> Result<DecodedImageInfo> {
        let mut source = MemorySource::new(id, data);
        self.probe(&mut source)
    }
}
