use super::{Anchors, GlyphRegion};

/// How an entry's offset was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSource {
    /// Laid out additively from the symbol anchor
    Static,
    /// Exact match of a prefix of `trial_len` characters
    Matched { trial_len: usize },
    /// Carried forward from the end of the previous entry
    Extrapolated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub key: String,
    /// Absolute byte offset into the blob
    pub offset: usize,
    /// Length in legacy characters
    pub length: usize,
    pub source: OffsetSource,
}

impl ResolvedEntry {
    /// Byte offset just past this entry.
    pub fn end(&self) -> usize {
        self.offset + self.length * crate::encoding::BYTES_PER_CHAR
    }
}

/// Everything the resolver produced for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub anchors: Anchors,
    /// Static entries first, then the rest in database order
    pub entries: Vec<ResolvedEntry>,
    pub glyphs: Vec<GlyphRegion>,
}

impl ResolvedLayout {
    pub fn entry(&self, key: &str) -> Option<&ResolvedEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }
}
