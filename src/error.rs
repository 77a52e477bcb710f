use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{source_id}: not a supported image format")]
    Unsupported { source_id: String },

    #[error("{source_id}: source ended after {bytes} bytes before dimensions were found")]
    Truncated { source_id: String, bytes: usize },

    #[error("{source_id}: gave up after {attempts} attempts ({bytes} bytes read)")]
    Exhausted {
        source_id: String,
        bytes: usize,
        attempts: u32,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
