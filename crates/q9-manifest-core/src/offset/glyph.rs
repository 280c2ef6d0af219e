//! Fixed pictorial/radical regions.
//!
//! Glyph regions are not derived at run time; their offsets and counts were
//! verified against the blob out of band and come from configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRegion {
    /// Absolute byte offset into the blob
    pub offset: usize,
    /// Number of legacy characters in the region
    pub length: usize,
}

pub fn resolve_glyph_regions(regions: &[GlyphRegion]) -> Vec<GlyphRegion> {
    for region in regions {
        debug!(
            "Glyph region at 0x{:X} ({} glyphs)",
            region.offset, region.length
        );
    }
    regions.to_vec()
}
