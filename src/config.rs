use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decoder::DecoderOptions;
use crate::error::ConfigError;
use crate::types::BmpHeightPolicy;

const KB: usize = 1024;
const MB: usize = KB * 1024;

pub const DEFAULT_INITIAL_BYTES: usize = 256;
pub const DEFAULT_GROWTH_FACTOR: usize = 2;
pub const DEFAULT_MAX_BYTES: usize = MB;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// How a [`Prober`](crate::probe::Prober) grows its fetch window and when it
/// stops asking for more bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub initial_bytes: usize,
    pub growth_factor: usize,
    pub max_bytes: usize,
    pub max_attempts: u32,
    pub bmp_height: BmpHeightPolicy,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            initial_bytes: DEFAULT_INITIAL_BYTES,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_bytes: DEFAULT_MAX_BYTES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            bmp_height: BmpHeightPolicy::default(),
        }
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_initial_bytes(mut self, bytes: usize) -> Self {
        self.initial_bytes = bytes;
        self
    }

    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    pub fn with_max_bytes(mut self, bytes: usize) -> Self {
        self.max_bytes = bytes;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_bmp_height(mut self, policy: BmpHeightPolicy) -> Self {
        self.bmp_height = policy;
        self
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::new().with_bmp_height(self.bmp_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_bytes == 0 {
            return Err(invalid("initial_bytes", "must be greater than zero"));
        }
        if self.growth_factor < 2 {
            return Err(invalid("growth_factor", "must be at least 2"));
        }
        if self.max_bytes < self.initial_bytes {
            return Err(invalid(
                "max_bytes",
                format!("must be at least initial_bytes ({})", self.initial_bytes),
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts", "must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
