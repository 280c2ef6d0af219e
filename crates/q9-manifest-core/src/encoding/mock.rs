//! Test encoding that maps ASCII to two bytes per character.
//!
//! Each ASCII character `c` becomes `[c, 0x00]`; anything else is unencodable.
//! This keeps synthetic blobs readable in tests.

use super::LegacyEncoding;

#[derive(Debug, Clone, Copy, Default)]
pub struct WideAscii;

impl LegacyEncoding for WideAscii {
    fn encode(&self, text: &str) -> Option<Vec<u8>> {
        if !text.is_ascii() {
            return None;
        }
        Some(text.bytes().flat_map(|b| [b, 0x00]).collect())
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes
            .chunks(2)
            .map(|pair| {
                if pair[0].is_ascii() {
                    pair[0] as char
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "wide-ascii"
    }
}

/// Assemble a blob from `(offset, text)` placements over a filler byte.
pub fn blob_with(size: usize, placements: &[(usize, &str)]) -> Vec<u8> {
    let mut bytes = vec![0xFF; size];
    for (offset, text) in placements {
        let encoded = WideAscii.encode(text).expect("placement must be ASCII");
        bytes[*offset..*offset + encoded.len()].copy_from_slice(&encoded);
    }
    bytes
}
