//! Lookup command implementation.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use q9_manifest_core::{
    Config, EncodingRsCodec, Inputs, LegacyBlob, LegacyEncoding, OffsetSource, ResolvedEntry,
    build,
};

/// What the blob holds at a resolved entry, compared with the database value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match(String),
    Differs(String),
    OutOfRange,
}

pub fn check_entry<E: LegacyEncoding>(
    blob: &LegacyBlob,
    codec: &E,
    entry: &ResolvedEntry,
    expected: &str,
) -> Verdict {
    match blob.slice_chars(entry.offset, entry.length) {
        Some(bytes) => {
            let actual = codec.decode(bytes);
            if actual == expected {
                Verdict::Match(actual)
            } else {
                Verdict::Differs(actual)
            }
        }
        None => Verdict::OutOfRange,
    }
}

/// Resolve offsets and show what the blob holds at each requested key
pub fn run(config: &Config, keys: &[String]) -> Result<()> {
    let inputs = Inputs::load(&config.paths).context("Failed to load inputs")?;
    let codec = EncodingRsCodec::for_label(&config.layout.encoding)?;
    let outcome = build(&inputs, &codec, &config.layout)?;

    for key in keys {
        let Some(entry) = outcome.layout.entry(key) else {
            println!("{}: {}", key, "not in database".red());
            continue;
        };

        let expected = inputs
            .database
            .get(key)
            .map(|e| e.value.as_str())
            .unwrap_or_default();

        let source = match entry.source {
            OffsetSource::Static => "static".to_string(),
            OffsetSource::Matched { trial_len } => format!("matched/{}", trial_len),
            OffsetSource::Extrapolated => "extrapolated".to_string(),
        };

        println!(
            "{}: offset {} (0x{:X}), length {}, {}",
            key, entry.offset, entry.offset, entry.length, source
        );
        println!("  database: {:?}", expected);

        match check_entry(&inputs.blob, &codec, entry, expected) {
            Verdict::Match(actual) => println!("  blob:     {:?} {}", actual, "match".green()),
            Verdict::Differs(actual) => {
                println!("  blob:     {:?} {}", actual, "differs".yellow())
            }
            Verdict::OutOfRange => println!("  blob:     {}", "out of range".red()),
        }
    }

    Ok(())
}
