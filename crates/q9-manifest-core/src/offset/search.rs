//! Global prefix search.
//!
//! Each non-static value is looked up anywhere in the blob by its legacy
//! encoded prefix. Longer prefixes are tried first; the first trial length
//! with any match wins and the first occurrence in the blob is taken. No
//! uniqueness check is made.

use tracing::debug;

use crate::blob::LegacyBlob;
use crate::database::Entry;
use crate::encoding::LegacyEncoding;

/// Result of one trial length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Match(usize),
    NoMatch,
}

/// A confirmed match for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub offset: usize,
    /// Prefix length in characters that produced the match
    pub trial_len: usize,
}

/// First `chars` characters of `value`.
fn char_prefix(value: &str, chars: usize) -> &str {
    value
        .char_indices()
        .nth(chars)
        .map_or(value, |(end, _)| &value[..end])
}

/// Search for the `trial_len`-character prefix of `value`.
///
/// Values shorter than the trial length and prefixes outside the legacy
/// charset yield [`TrialOutcome::NoMatch`].
pub fn try_prefix<E: LegacyEncoding>(
    blob: &LegacyBlob,
    codec: &E,
    value: &str,
    trial_len: usize,
) -> TrialOutcome {
    if value.chars().count() < trial_len {
        return TrialOutcome::NoMatch;
    }

    let Some(pattern) = codec.encode(char_prefix(value, trial_len)) else {
        return TrialOutcome::NoMatch;
    };

    match blob.find(&pattern) {
        Some(offset) => TrialOutcome::Match(offset),
        None => TrialOutcome::NoMatch,
    }
}

/// Try each trial length in order and stop at the first match.
pub fn search_value<E: LegacyEncoding>(
    blob: &LegacyBlob,
    codec: &E,
    value: &str,
    trial_lengths: &[usize],
) -> Option<SearchHit> {
    if value.is_empty() {
        return None;
    }

    trial_lengths
        .iter()
        .find_map(|&trial_len| match try_prefix(blob, codec, value, trial_len) {
            TrialOutcome::Match(offset) => Some(SearchHit { offset, trial_len }),
            TrialOutcome::NoMatch => None,
        })
}

/// Search every entry, keeping the input order. `None` marks an unresolved entry.
pub fn search_entries<E: LegacyEncoding>(
    blob: &LegacyBlob,
    codec: &E,
    entries: &[&Entry],
    trial_lengths: &[usize],
) -> Vec<Option<SearchHit>> {
    entries
        .iter()
        .map(|entry| {
            let hit = search_value(blob, codec, &entry.value, trial_lengths);
            match hit {
                Some(hit) => debug!(
                    "{}: found at 0x{:X} (prefix {})",
                    entry.key, hit.offset, hit.trial_len
                ),
                None => debug!("{}: no match", entry.key),
            }
            hit
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TRIAL_LENGTHS;
    use crate::encoding::EncodingRsCodec;
    use crate::encoding::mock::{WideAscii, blob_with};

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("HELLOHELLOX", 10), "HELLOHELLO");
        assert_eq!(char_prefix("麥趙楊黃", 2), "麥趙");
        assert_eq!(char_prefix("AB", 4), "AB");
    }

    #[test]
    fn test_longest_trial_wins() {
        // 10-char prefix at 100, 6-char prefix alone at 20
        let blob = LegacyBlob::new(blob_with(200, &[(20, "ABCDEF"), (100, "ABCDEFGHIJ")]));
        let hit = search_value(&blob, &WideAscii, "ABCDEFGHIJKL", &DEFAULT_TRIAL_LENGTHS);
        assert_eq!(
            hit,
            Some(SearchHit {
                offset: 100,
                trial_len: 10
            })
        );
    }

    #[test]
    fn test_falls_back_to_shorter_trial() {
        let blob = LegacyBlob::new(blob_with(100, &[(40, "ABCDxx")]));
        let hit = search_value(&blob, &WideAscii, "ABCDEFGHIJ", &DEFAULT_TRIAL_LENGTHS);
        assert_eq!(
            hit,
            Some(SearchHit {
                offset: 40,
                trial_len: 4
            })
        );
    }

    #[test]
    fn test_short_value_skips_long_trials() {
        let blob = LegacyBlob::new(blob_with(100, &[(10, "ABCDE")]));
        assert_eq!(
            try_prefix(&blob, &WideAscii, "ABCDE", 6),
            TrialOutcome::NoMatch
        );
        assert_eq!(
            try_prefix(&blob, &WideAscii, "ABCDE", 4),
            TrialOutcome::Match(10)
        );
        // Shorter than every trial length: never searched
        assert_eq!(
            search_value(&blob, &WideAscii, "ABC", &DEFAULT_TRIAL_LENGTHS),
            None
        );
    }

    #[test]
    fn test_unencodable_prefix_falls_through() {
        // Non-ASCII in the 10-char prefix only; the 6-char prefix is encodable
        let blob = LegacyBlob::new(blob_with(100, &[(8, "ABCDEF")]));
        let hit = search_value(&blob, &WideAscii, "ABCDEFGHé!!", &DEFAULT_TRIAL_LENGTHS);
        assert_eq!(
            hit,
            Some(SearchHit {
                offset: 8,
                trial_len: 6
            })
        );
    }

    #[test]
    fn test_empty_value_is_not_searched() {
        let blob = LegacyBlob::new(vec![0u8; 10]);
        assert_eq!(search_value(&blob, &WideAscii, "", &[1]), None);
    }

    #[test]
    fn test_search_entries_keeps_order() {
        let blob = LegacyBlob::new(blob_with(100, &[(0, "WXYZ"), (50, "QRST")]));
        let a = Entry::new("10", "QRSTUV");
        let b = Entry::new("11", "nope");
        let c = Entry::new("12", "WXYZ");
        let hits = search_entries(&blob, &WideAscii, &[&a, &b, &c], &DEFAULT_TRIAL_LENGTHS);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].map(|h| h.offset), Some(50));
        assert_eq!(hits[1], None);
        assert_eq!(hits[2].map(|h| h.offset), Some(0));
    }

    #[test]
    fn test_big5_prefix_search() {
        let codec = EncodingRsCodec::big5();
        let mut bytes = vec![0u8; 20];
        bytes.extend(codec.encode("陳林黃張李王").unwrap());
        let blob = LegacyBlob::new(bytes);

        let hit = search_value(&blob, &codec, "陳林黃張李王吳", &DEFAULT_TRIAL_LENGTHS);
        assert_eq!(
            hit,
            Some(SearchHit {
                offset: 20,
                trial_len: 6
            })
        );
    }
}
