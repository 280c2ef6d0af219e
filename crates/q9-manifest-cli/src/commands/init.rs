//! Init command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use q9_manifest_core::Config;

/// Write the default configuration to `path`
pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = Config::default().to_toml_string()?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q9-manifest.toml");

        run(&path, false).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q9-manifest.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(run(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        run(&path, true).unwrap();
        assert!(Config::load(&path).is_ok());
    }
}
