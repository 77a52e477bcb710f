//! Byte sources that hand out a forward-growing prefix of one file.
//!
//! The decoder never performs I/O. A [`ByteSource`] is what the probe layer
//! pulls from when a decode attempt reports that more data is needed.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use bytes::{Bytes, BytesMut};

use crate::error::Result;

/// A source of leading bytes for a single image.
///
/// Implementations must append bytes contiguously: after any sequence of
/// calls, `buf` holds the first `buf.len()` bytes of the underlying file,
/// byte-identical across calls. Bytes are never reordered or dropped.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use imgprobe::source::{ByteSource, MemorySource};
///
/// let mut source = MemorySource::new("inline", &b"GIF89a"[..]);
/// let mut buf = BytesMut::new();
/// assert_eq!(source.fill(&mut buf, 4).unwrap(), 4);
/// assert_eq!(source.fill(&mut buf, 64).unwrap(), 2);
/// assert_eq!(&buf[..], b"GIF89a");
/// ```
pub trait ByteSource {
    /// Identifier used to label results and errors.
    fn id(&self) -> &str;

    /// Appends bytes to `buf` until it holds `want` bytes or the source is
    /// exhausted.
    ///
    /// # Returns
    ///
    /// The number of bytes appended. Fewer than `want - buf.len()` means the
    /// source has ended.
    fn fill(&mut self, buf: &mut BytesMut, want: usize) -> Result<usize>;
}

/// Reads a prefix from anything implementing [`Read`], front to back.
pub struct ReaderSource<R> {
    id: String,
    reader: R,
}

pub type FileSource = ReaderSource<File>;

impl<R: Read> ReaderSource<R> {
    pub fn new(id: impl Into<String>, reader: R) -> Self {
        Self {
            id: id.into(),
            reader,
        }
    }
}

impl ReaderSource<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(path.display().to_string(), file))
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn id(&self) -> &str {
        &self.id
    }

    fn fill(&mut self, buf: &mut BytesMut, want: usize) -> Result<usize> {
        let start = buf.len();
        if want <= start {
            return Ok(0);
        }

        buf.resize(want, 0);
        let mut filled = start;

        while filled < want {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    buf.truncate(filled);
                    return Err(e.into());
                }
            }
        }

        buf.truncate(filled);
        Ok(filled - start)
    }
}

/// An in-memory image, for callers that already hold the bytes.
#[derive(Debug, Clone)]
pub struct MemorySource {
    id: String,
    data: Bytes,
}

impl MemorySource {
    pub fn new(id: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }
}

impl ByteSource for MemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fill(&mut self, buf: &mut BytesMut, want: usize) -> Result<usize> {
        let start = buf.len().min(self.data.len());
        let end = want.min(self.data.len());
        if end <= start {
            return Ok(0);
        }
        buf.extend_from_slice(&self.data[start..end]);
        Ok(end - start)
    }
}
