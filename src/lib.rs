pub mod config;
pub mod decoder;
pub mod error;
pub mod extract;
pub mod formats;
pub mod probe;
pub mod reader;
pub mod signature;
pub mod source;
pub mod types;

pub use config::ProbeConfig;
pub use decoder::{decode, Decoder, DecoderOptions};
pub use error::{ConfigError, ProbeError, Result};
pub use probe::Prober;
pub use signature::{classify, Classification};
pub use source::{ByteSource, FileSource, MemorySource, ReaderSource};
pub use types::{BmpHeightPolicy, DecodedImageInfo, Outcome, SupportedFormat};
