//! Landmark search for the symbol and surname blocks.

use serde::Serialize;
use strum::Display;
use tracing::info;

use crate::blob::LegacyBlob;
use crate::config::LayoutConfig;
use crate::encoding::LegacyEncoding;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AnchorKind {
    Symbol,
    Surname,
}

/// Absolute byte offsets of the two landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchors {
    /// Start of the static block
    pub symbol: usize,
    /// Start of the general block; seeds the sequential fallback
    pub surname: usize,
}

/// Find the first occurrence of `literal` in the blob.
///
/// A landmark that is absent leaves no valid starting point for the offset
/// chain, so this fails instead of returning a placeholder.
pub fn locate_anchor<E: LegacyEncoding>(
    blob: &LegacyBlob,
    codec: &E,
    kind: AnchorKind,
    literal: &str,
) -> Result<usize> {
    let pattern = codec
        .encode(literal)
        .ok_or_else(|| Error::UnencodableAnchor {
            kind,
            literal: literal.to_string(),
            encoding: codec.name().to_string(),
        })?;

    blob.find(&pattern).ok_or_else(|| Error::MissingAnchor {
        kind,
        literal: literal.to_string(),
    })
}

pub fn locate_anchors<E: LegacyEncoding>(
    blob: &LegacyBlob,
    codec: &E,
    layout: &LayoutConfig,
) -> Result<Anchors> {
    let symbol = locate_anchor(blob, codec, AnchorKind::Symbol, &layout.symbol_anchor)?;
    let surname = locate_anchor(blob, codec, AnchorKind::Surname, &layout.surname_anchor)?;

    info!("Symbols: {}, Surnames: {}", symbol, surname);

    Ok(Anchors { symbol, surname })
}
