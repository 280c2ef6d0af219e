//! Legacy text encoding.
//!
//! The resolver treats the legacy charset as a black box: text goes in, bytes
//! come out, or the text is rejected as unencodable. Every legacy character
//! occupies [`BYTES_PER_CHAR`] bytes in the blob.

#[cfg(test)]
pub mod mock;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Width of one legacy character in the blob.
pub const BYTES_PER_CHAR: usize = 2;

pub trait LegacyEncoding {
    /// Encode `text`, or return `None` if any character is outside the charset.
    fn encode(&self, text: &str) -> Option<Vec<u8>>;

    /// Decode legacy bytes, replacing malformed sequences.
    fn decode(&self, bytes: &[u8]) -> String;

    /// Human-readable encoding name for diagnostics.
    fn name(&self) -> &str;
}

/// [`LegacyEncoding`] backed by an `encoding_rs` encoding (Big5 by default).
#[derive(Debug, Clone, Copy)]
pub struct EncodingRsCodec {
    encoding: &'static Encoding,
}

impl EncodingRsCodec {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    pub fn big5() -> Self {
        Self::new(encoding_rs::BIG5)
    }

    /// Resolve a WHATWG encoding label such as `"big5"` or `"shift_jis"`.
    ///
    /// Encodings that `encoding_rs` cannot encode into (UTF-16, replacement)
    /// are rejected, since their output would silently be UTF-8.
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;

        if encoding.output_encoding() != encoding {
            return Err(Error::UnknownEncoding(format!(
                "{} (not encodable, would emit {})",
                encoding.name(),
                encoding.output_encoding().name()
            )));
        }

        Ok(Self::new(encoding))
    }
}

impl LegacyEncoding for EncodingRsCodec {
    fn encode(&self, text: &str) -> Option<Vec<u8>> {
        // encoding_rs substitutes numeric character references for unmappable
        // characters and flags it; such output never appears in the blob.
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            None
        } else {
            Some(bytes.into_owned())
        }
    }

    fn decode(&self, bytes: &[u8]) -> String {
        let (decoded, _) = self.encoding.decode_without_bom_handling(bytes);
        decoded.into_owned()
    }

    fn name(&self) -> &str {
        self.encoding.name()
    }
}
