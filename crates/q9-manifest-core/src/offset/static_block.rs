//! Static block layout.
//!
//! The static keys sit back to back from the symbol anchor with no padding,
//! each taking two bytes per character. Their offsets are purely additive and
//! never searched.

use crate::database::Database;
use crate::error::{Error, Result};

use super::{OffsetSource, ResolvedEntry};

pub fn layout_static_block(
    db: &Database,
    static_keys: &[String],
    start: usize,
) -> Result<Vec<ResolvedEntry>> {
    let (entries, _end) = static_keys.iter().try_fold(
        (Vec::with_capacity(static_keys.len()), start),
        |(mut entries, offset), key| {
            let entry = db
                .get(key)
                .ok_or_else(|| Error::MissingStaticKey(key.clone()))?;

            let resolved = ResolvedEntry {
                key: key.clone(),
                offset,
                length: entry.char_len(),
                source: OffsetSource::Static,
            };
            let next = resolved.end();
            entries.push(resolved);
            Ok::<_, Error>((entries, next))
        },
    )?;

    Ok(entries)
}
