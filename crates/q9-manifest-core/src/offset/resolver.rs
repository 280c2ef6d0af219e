use tracing::info;

use crate::blob::LegacyBlob;
use crate::config::LayoutConfig;
use crate::database::{Database, Entry};
use crate::encoding::LegacyEncoding;
use crate::error::Result;

use super::{
    ResolvedLayout, layout_static_block, locate_anchors, resolve_glyph_regions,
    resolve_sequential, search_entries,
};

/// Resolves every database key to an offset in the legacy blob.
pub struct OffsetResolver<'a, E: LegacyEncoding> {
    blob: &'a LegacyBlob,
    codec: &'a E,
    layout: &'a LayoutConfig,
}

impl<'a, E: LegacyEncoding> OffsetResolver<'a, E> {
    pub fn new(blob: &'a LegacyBlob, codec: &'a E, layout: &'a LayoutConfig) -> Self {
        Self {
            blob,
            codec,
            layout,
        }
    }

    pub fn resolve(&self, db: &Database) -> Result<ResolvedLayout> {
        // Phase 1: landmarks
        let anchors = locate_anchors(self.blob, self.codec, self.layout)?;

        // Phase 2: static block from the symbol anchor
        let mut entries = layout_static_block(db, &self.layout.static_keys, anchors.symbol)?;

        // Phase 3: global prefix search over the remaining keys
        let dynamic: Vec<&Entry> = db
            .iter()
            .filter(|entry| !self.layout.is_static_key(&entry.key))
            .collect();
        let hits = search_entries(
            self.blob,
            self.codec,
            &dynamic,
            &self.layout.trial_lengths,
        );
        info!(
            "Found {} offsets globally.",
            hits.iter().filter(|hit| hit.is_some()).count()
        );

        // Phase 4: sequential fallback from the surname anchor
        entries.extend(resolve_sequential(&dynamic, &hits, anchors.surname));

        // Phase 5: glyph regions
        let glyphs = resolve_glyph_regions(&self.layout.glyphs);

        info!(
            "Resolved {} entries and {} glyph regions.",
            entries.len(),
            glyphs.len()
        );

        Ok(ResolvedLayout {
            anchors,
            entries,
            glyphs,
        })
    }
}
