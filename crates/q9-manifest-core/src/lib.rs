//! # q9-manifest-core
//!
//! Core library for the Q9 legacy resource manifest builder.
//!
//! This crate provides:
//! - Loading of the ordered entry database and the legacy binary blob
//! - Legacy text encoding behind the [`LegacyEncoding`] trait
//! - Offset resolution: anchor search, static block layout, prefix search
//!   with sequential fallback, and fixed glyph regions
//! - Manifest serialization and a post-resolution verification report
//!
//! ## Pipeline
//!
//! ```ignore
//! use q9_manifest_core::{Config, EncodingRsCodec, Inputs, build};
//!
//! let config = Config::load("q9-manifest.toml")?;
//! let inputs = Inputs::load(&config.paths)?;
//! let codec = EncodingRsCodec::for_label(&config.layout.encoding)?;
//! let outcome = build(&inputs, &codec, &config.layout)?;
//! outcome.manifest.write_to(&config.paths.output, config.output.style, config.output.pretty)?;
//! ```

pub mod blob;
pub mod config;
pub mod database;
pub mod encoding;
pub mod error;
pub mod manifest;
pub mod offset;
pub mod pipeline;
pub mod report;

pub use blob::LegacyBlob;
pub use config::{Config, LayoutConfig, LayoutConfigBuilder, OutputConfig, PathsConfig};
pub use database::{Database, Entry};
pub use encoding::{EncodingRsCodec, LegacyEncoding};
pub use error::{Error, Result};
pub use manifest::{Manifest, ManifestEntry, ManifestStyle};
pub use offset::{
    AnchorKind, Anchors, GlyphRegion, OffsetResolver, OffsetSource, ResolvedEntry, ResolvedLayout,
    SearchHit, TrialOutcome,
};
pub use pipeline::{BuildOutcome, Inputs, build};
pub use report::{OutOfRange, ResolutionReport};
