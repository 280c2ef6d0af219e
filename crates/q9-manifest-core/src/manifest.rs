//! Manifest document.
//!
//! ```json
//! {
//!   "db": [{ "key": "01", "offset": 1000, "length": 1 }],
//!   "glyph": [{ "offset": 320998, "length": 9 }]
//! }
//! ```
//!
//! The compact style writes `k`, `o` and `l` instead of `key`, `offset` and
//! `length`, matching manifests produced by the earlier tooling.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use strum::{AsRefStr, Display, EnumString};
use tracing::info;

use crate::error::Result;
use crate::offset::{GlyphRegion, ResolvedLayout};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ManifestStyle {
    /// `key` / `offset` / `length`
    #[default]
    Full,
    /// `k` / `o` / `l`
    Compact,
}

impl ManifestStyle {
    fn field_names(self) -> (&'static str, &'static str, &'static str) {
        match self {
            ManifestStyle::Full => ("key", "offset", "length"),
            ManifestStyle::Compact => ("k", "o", "l"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub key: String,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub db: Vec<ManifestEntry>,
    pub glyph: Vec<GlyphRegion>,
}

impl From<&ResolvedLayout> for Manifest {
    fn from(layout: &ResolvedLayout) -> Self {
        Self {
            db: layout
                .entries
                .iter()
                .map(|entry| ManifestEntry {
                    key: entry.key.clone(),
                    offset: entry.offset,
                    length: entry.length,
                })
                .collect(),
            glyph: layout.glyphs.clone(),
        }
    }
}

impl Manifest {
    pub fn to_json_value(&self, style: ManifestStyle) -> JsonValue {
        let (key, offset, length) = style.field_names();

        let db = self
            .db
            .iter()
            .map(|entry| {
                let mut object = Map::new();
                object.insert(key.to_string(), entry.key.clone().into());
                object.insert(offset.to_string(), entry.offset.into());
                object.insert(length.to_string(), entry.length.into());
                JsonValue::Object(object)
            })
            .collect();

        let glyph = self
            .glyph
            .iter()
            .map(|region| {
                let mut object = Map::new();
                object.insert(offset.to_string(), region.offset.into());
                object.insert(length.to_string(), region.length.into());
                JsonValue::Object(object)
            })
            .collect();

        let mut document = Map::new();
        document.insert("db".to_string(), JsonValue::Array(db));
        document.insert("glyph".to_string(), JsonValue::Array(glyph));
        JsonValue::Object(document)
    }

    pub fn to_json(&self, style: ManifestStyle, pretty: bool) -> Result<String> {
        let value = self.to_json_value(style);
        let json = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }

    /// Write the manifest in full.
    ///
    /// The document goes to a temporary sibling first and is renamed into
    /// place, so an interrupted write never leaves a partial manifest.
    pub fn write_to<P: AsRef<Path>>(
        &self,
        path: P,
        style: ManifestStyle,
        pretty: bool,
    ) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json(style, pretty)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = temp_sibling(path);
        if let Err(e) = fs::write(&temp, json).and_then(|()| fs::rename(&temp, path)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        info!("Generated {} entries.", self.db.len());
        info!("Saved manifest to {}", path.display());
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "manifest".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn sample() -> Manifest {
        Manifest {
            db: vec![
                ManifestEntry {
                    key: "01".to_string(),
                    offset: 1000,
                    length: 1,
                },
                ManifestEntry {
                    key: "10".to_string(),
                    offset: 1500,
                    length: 11,
                },
            ],
            glyph: vec![GlyphRegion {
                offset: 320_998,
                length: 9,
            }],
        }
    }

    #[test]
    fn test_full_style_field_names() {
        let json = sample().to_json(ManifestStyle::Full, false).unwrap();
        assert_eq!(
            json,
            r#"{"db":[{"key":"01","offset":1000,"length":1},{"key":"10","offset":1500,"length":11}],"glyph":[{"offset":320998,"length":9}]}"#
        );
    }

    #[test]
    fn test_compact_style_field_names() {
        let json = sample().to_json(ManifestStyle::Compact, false).unwrap();
        assert_eq!(
            json,
            r#"{"db":[{"k":"01","o":1000,"l":1},{"k":"10","o":1500,"l":11}],"glyph":[{"o":320998,"l":9}]}"#
        );
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(ManifestStyle::from_str("full").unwrap(), ManifestStyle::Full);
        assert_eq!(
            ManifestStyle::from_str("Compact").unwrap(),
            ManifestStyle::Compact
        );
        assert!(ManifestStyle::from_str("verbose").is_err());
        assert_eq!(ManifestStyle::Compact.to_string(), "compact");
    }

    #[test]
    fn test_write_to_creates_parent_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("recipes.json");

        sample().write_to(&path, ManifestStyle::Full, true).unwrap();

        let written: JsonValue =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["db"][1]["offset"], 1500);
        assert_eq!(written["glyph"][0]["length"], 9);

        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("recipes.json")]);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory where the manifest should go
        let path = dir.path().join("recipes.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = sample().write_to(&path, ManifestStyle::Full, false);
        assert!(err.is_err());

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("recipes.json")]);
    }
}
