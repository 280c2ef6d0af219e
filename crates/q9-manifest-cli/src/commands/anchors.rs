//! Anchors command implementation.

use anyhow::{Context, Result, bail};
use q9_manifest_core::offset::{AnchorKind, locate_anchor};
use q9_manifest_core::{Config, EncodingRsCodec, LegacyBlob, LegacyEncoding};

/// Print the position of both landmarks; fails if either is missing
pub fn run(config: &Config) -> Result<()> {
    let blob = LegacyBlob::load(&config.paths.blob)
        .with_context(|| format!("Failed to read {}", config.paths.blob.display()))?;
    let codec = EncodingRsCodec::for_label(&config.layout.encoding)?;

    println!(
        "Legacy blob: {} ({} bytes, {})",
        config.paths.blob.display(),
        blob.len(),
        codec.name()
    );
    println!();

    let landmarks = [
        (AnchorKind::Symbol, &config.layout.symbol_anchor),
        (AnchorKind::Surname, &config.layout.surname_anchor),
    ];

    let mut missing = Vec::new();
    for (kind, literal) in landmarks {
        let pattern = codec
            .encode(literal)
            .map(|bytes| {
                bytes
                    .iter()
                    .map(|b| format!("{:02X}", b))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_else(|| "(unencodable)".to_string());

        println!("{:<8} {:?}  [{}]", kind.to_string(), literal, pattern);
        match locate_anchor(&blob, &codec, kind, literal) {
            Ok(offset) => println!("         found at {} (0x{:X})", offset, offset),
            Err(e) => {
                println!("         {}", e);
                missing.push(kind.to_string());
            }
        }
    }

    if !missing.is_empty() {
        bail!("Missing anchor(s): {}", missing.join(", "));
    }

    Ok(())
}
