//! In-memory legacy binary blob.

use std::fs;
use std::path::Path;

use memchr::memmem;

use crate::encoding::BYTES_PER_CHAR;
use crate::error::Result;

/// Immutable legacy resource file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyBlob {
    bytes: Vec<u8>,
}

impl LegacyBlob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read the whole file into memory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(fs::read(path)?))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Position of the first occurrence of `pattern`. An empty pattern never matches.
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return None;
        }
        memmem::find(&self.bytes, pattern)
    }

    /// Whether `chars` legacy characters starting at `offset` lie inside the blob.
    pub fn contains_span(&self, offset: usize, chars: usize) -> bool {
        span_fits(self.bytes.len(), offset, chars)
    }

    /// Bytes of `chars` legacy characters starting at `offset`, if in range.
    pub fn slice_chars(&self, offset: usize, chars: usize) -> Option<&[u8]> {
        if !self.contains_span(offset, chars) {
            return None;
        }
        Some(&self.bytes[offset..offset + chars * BYTES_PER_CHAR])
    }
}

/// Whether `chars` legacy characters at `offset` end within `blob_len` bytes.
pub fn span_fits(blob_len: usize, offset: usize, chars: usize) -> bool {
    chars
        .checked_mul(BYTES_PER_CHAR)
        .and_then(|len| offset.checked_add(len))
        .is_some_and(|end| end <= blob_len)
}

impl From<Vec<u8>> for LegacyBlob {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
