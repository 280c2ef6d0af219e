//! Post-resolution summary and bounds check.
//!
//! Extrapolated chains can run past the end of the blob when the database
//! and the legacy file drift apart. Such entries are reported, not dropped.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::blob::span_fits;
use crate::error::Result;
use crate::offset::{Anchors, OffsetSource, ResolvedLayout};

/// An entry whose span does not fit inside the blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutOfRange {
    /// Database key, or `glyph[N]` for a glyph region
    pub label: String,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub blob_len: usize,
    pub anchors: Anchors,
    pub static_count: usize,
    pub matched_count: usize,
    pub extrapolated_count: usize,
    /// trial length -> number of entries matched at that length
    pub matches_by_trial: BTreeMap<usize, usize>,
    pub out_of_range: Vec<OutOfRange>,
}

impl ResolutionReport {
    pub fn new(layout: &ResolvedLayout, blob_len: usize) -> Self {
        let mut report = Self {
            blob_len,
            anchors: layout.anchors,
            static_count: 0,
            matched_count: 0,
            extrapolated_count: 0,
            matches_by_trial: BTreeMap::new(),
            out_of_range: Vec::new(),
        };

        for entry in &layout.entries {
            match entry.source {
                OffsetSource::Static => report.static_count += 1,
                OffsetSource::Matched { trial_len } => {
                    report.matched_count += 1;
                    *report.matches_by_trial.entry(trial_len).or_default() += 1;
                }
                OffsetSource::Extrapolated => report.extrapolated_count += 1,
            }

            if !span_fits(blob_len, entry.offset, entry.length) {
                report.out_of_range.push(OutOfRange {
                    label: entry.key.clone(),
                    offset: entry.offset,
                    length: entry.length,
                });
            }
        }

        for (i, region) in layout.glyphs.iter().enumerate() {
            if !span_fits(blob_len, region.offset, region.length) {
                report.out_of_range.push(OutOfRange {
                    label: format!("glyph[{}]", i),
                    offset: region.offset,
                    length: region.length,
                });
            }
        }

        report
    }

    pub fn total(&self) -> usize {
        self.static_count + self.matched_count + self.extrapolated_count
    }

    /// No entry or glyph region extends past the end of the blob.
    pub fn is_clean(&self) -> bool {
        self.out_of_range.is_empty()
    }

    /// Save the report as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn log_summary(&self) {
        info!(
            "Entries: {} static, {} matched, {} extrapolated",
            self.static_count, self.matched_count, self.extrapolated_count
        );
        for (trial_len, count) in &self.matches_by_trial {
            info!("  matched with {}-char prefix: {}", trial_len, count);
        }
        for entry in &self.out_of_range {
            warn!(
                "{} at 0x{:X} (+{} chars) extends past blob end 0x{:X}",
                entry.label, entry.offset, entry.length, self.blob_len
            );
        }
    }
}
