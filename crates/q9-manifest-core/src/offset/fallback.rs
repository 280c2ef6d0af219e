//! Sequential fallback resolution.
//!
//! The blob stores entries in roughly database order with occasional drift.
//! Walking the entries in order, a search hit moves the running position to
//! the confirmed offset; otherwise the entry is placed where the previous one
//! ended. Every entry gets an offset.

use crate::database::Entry;

use super::{OffsetSource, ResolvedEntry, SearchHit};

/// Assign offsets to `entries` in order, starting the chain at `start`.
///
/// `hits` is aligned with `entries`; a missing hit means the entry is
/// extrapolated from the previous entry's end.
pub fn resolve_sequential(
    entries: &[&Entry],
    hits: &[Option<SearchHit>],
    start: usize,
) -> Vec<ResolvedEntry> {
    debug_assert_eq!(entries.len(), hits.len());

    let (resolved, _end) = entries.iter().zip(hits).fold(
        (Vec::with_capacity(entries.len()), start),
        |(mut resolved, position), (entry, hit)| {
            let (offset, source) = match hit {
                Some(hit) => (
                    hit.offset,
                    OffsetSource::Matched {
                        trial_len: hit.trial_len,
                    },
                ),
                None => (position, OffsetSource::Extrapolated),
            };

            let placed = ResolvedEntry {
                key: entry.key.clone(),
                offset,
                length: entry.char_len(),
                source,
            };
            let next = placed.end();
            resolved.push(placed);
            (resolved, next)
        },
    );

    resolved
}
