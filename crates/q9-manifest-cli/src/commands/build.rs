//! Build command implementation.

use anyhow::{Context, Result, bail};
use q9_manifest_core::{Config, EncodingRsCodec, Inputs, build};
use tracing::info;

use crate::cli::BuildArgs;

/// Run the full pipeline and write the manifest
pub fn run(config: &Config, args: &BuildArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.paths.output.clone());
    let style = args.style.unwrap_or(config.output.style);
    let pretty = args.pretty || config.output.pretty;

    let inputs = Inputs::load(&config.paths).context("Failed to load inputs")?;
    let codec = EncodingRsCodec::for_label(&config.layout.encoding)?;

    let outcome = build(&inputs, &codec, &config.layout)?;
    outcome.report.log_summary();

    if let Some(ref report_path) = args.report {
        outcome
            .report
            .save(report_path)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        info!("Saved report to {}", report_path.display());
    }

    if args.strict && !outcome.report.is_clean() {
        bail!(
            "{} entries extend past the end of the legacy blob; manifest not written",
            outcome.report.out_of_range.len()
        );
    }

    outcome
        .manifest
        .write_to(&output, style, pretty)
        .with_context(|| format!("Failed to write manifest {}", output.display()))?;

    Ok(())
}
