//! End-to-end run: load inputs, resolve, build the manifest.
//!
//! Nothing is written here. Callers decide whether to persist the manifest
//! after inspecting the report, so a failed run never leaves output behind.

use tracing::info;

use crate::blob::LegacyBlob;
use crate::config::{LayoutConfig, PathsConfig};
use crate::database::Database;
use crate::encoding::LegacyEncoding;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::offset::{OffsetResolver, ResolvedLayout};
use crate::report::ResolutionReport;

/// Both input files, read in full.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub database: Database,
    pub blob: LegacyBlob,
}

impl Inputs {
    pub fn load(paths: &PathsConfig) -> Result<Self> {
        let database = Database::load(&paths.database)?;
        info!(
            "Loaded {} entries from {}",
            database.len(),
            paths.database.display()
        );

        let blob = LegacyBlob::load(&paths.blob)?;
        info!(
            "Loaded legacy blob {} ({} bytes)",
            paths.blob.display(),
            blob.len()
        );

        Ok(Self { database, blob })
    }
}

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub layout: ResolvedLayout,
    pub manifest: Manifest,
    pub report: ResolutionReport,
}

pub fn build<E: LegacyEncoding>(
    inputs: &Inputs,
    codec: &E,
    layout: &LayoutConfig,
) -> Result<BuildOutcome> {
    let resolved = OffsetResolver::new(&inputs.blob, codec, layout).resolve(&inputs.database)?;
    let report = ResolutionReport::new(&resolved, inputs.blob.len());
    let manifest = Manifest::from(&resolved);

    Ok(BuildOutcome {
        layout: resolved,
        manifest,
        report,
    })
}
