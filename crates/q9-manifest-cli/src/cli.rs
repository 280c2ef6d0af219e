use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use q9_manifest_core::ManifestStyle;

#[derive(Parser, Debug)]
#[command(name = "q9-manifest", version)]
#[command(about = "Byte-offset manifest builder for the Q9 legacy resource file")]
pub struct Cli {
    /// TOML configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "Q9_MANIFEST_CONFIG",
        default_value = "q9-manifest.toml"
    )]
    pub config: PathBuf,

    /// Override the database path from the config
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Override the legacy blob path from the config
    #[arg(long, global = true)]
    pub blob: Option<PathBuf>,

    /// Log per-key search results
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve every key and write the manifest (default)
    Build(BuildArgs),
    /// Locate the symbol and surname landmarks
    Anchors,
    /// Decode the blob at each key's resolved offset and compare with the database
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Build(BuildArgs::default())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Manifest destination (overrides the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field naming: full (key/offset/length) or compact (k/o/l)
    #[arg(long)]
    pub style: Option<ManifestStyle>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Refuse to write a manifest with entries past the end of the blob
    #[arg(long)]
    pub strict: bool,

    /// Also write the resolution report as JSON
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}
