//! CLI command implementations.

pub mod anchors;
pub mod build;
pub mod init;
pub mod lookup;

use anyhow::{Context, Result};
use q9_manifest_core::Config;
use tracing::{info, warn};

use crate::cli::Cli;

/// Load the config file, falling back to defaults when it does not exist,
/// then apply path overrides from the command line.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match Config::load(&cli.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", cli.config);
            c
        }
        Err(e) if e.is_not_found() => {
            warn!("Config {:?} not found, using defaults", cli.config);
            Config::default()
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load config {}", cli.config.display()));
        }
    };

    if let Some(ref database) = cli.database {
        config.paths.database = database.clone();
    }
    if let Some(ref blob) = cli.blob {
        config.paths.blob = blob.clone();
    }

    Ok(config)
}

#[cfg(test)]
pub(crate) mod fixture {
    use std::fs;
    use std::path::Path;

    use q9_manifest_core::{Config, EncodingRsCodec, LegacyEncoding};

    fn big5(text: &str) -> Vec<u8> {
        EncodingRsCodec::big5().encode(text).unwrap()
    }

    /// Static block at 0, surname block at 24, then `padding` filler chars.
    ///
    /// Key `10` is six chars but only its first four are in the blob, so it
    /// runs past the end when `padding` is below 2.
    pub fn write_inputs(dir: &Path, padding: usize) -> Config {
        let mut db = serde_json::Map::new();
        let mut blob = big5("１＝≠±");
        db.insert("01".into(), "１＝≠±".into());
        for (i, digit) in "２３４５６７８９".chars().enumerate() {
            db.insert(format!("{:02}", i + 2), digit.to_string().into());
            blob.extend(big5(&digit.to_string()));
        }
        db.insert("10".into(), "麥趙楊黃陳林".into());
        blob.extend(big5("麥趙楊黃"));
        blob.extend(big5(&"　".repeat(padding)));

        let mut config = Config::default();
        config.paths.database = dir.join("db.json");
        config.paths.blob = dir.join("Q9.IM_");
        config.paths.output = dir.join("recipes.json");
        config.layout.glyphs.clear();

        fs::write(
            &config.paths.database,
            serde_json::Value::Object(db).to_string(),
        )
        .unwrap();
        fs::write(&config.paths.blob, blob).unwrap();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults_with_overrides() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = Cli::try_parse_from([
            "q9-manifest",
            "--config",
            missing.to_str().unwrap(),
            "--database",
            "other.json",
            "--blob",
            "other.bin",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.paths.database, PathBuf::from("other.json"));
        assert_eq!(config.paths.blob, PathBuf::from("other.bin"));
        assert_eq!(config.layout, Config::default().layout);
    }

    #[test]
    fn test_overrides_apply_over_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q9-manifest.toml");
        fs::write(
            &path,
            "[paths]\ndatabase = \"from-file.json\"\nblob = \"from-file.bin\"\n\n[layout]\ntrial_lengths = [6]\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from([
            "q9-manifest",
            "--config",
            path.to_str().unwrap(),
            "--blob",
            "cli.bin",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.paths.database, PathBuf::from("from-file.json"));
        assert_eq!(config.paths.blob, PathBuf::from("cli.bin"));
        assert_eq!(config.layout.trial_lengths, vec![6]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q9-manifest.toml");
        fs::write(&path, "[layout\ntrial_lengths = ").unwrap();
        let cli = Cli::try_parse_from([
            "q9-manifest",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
