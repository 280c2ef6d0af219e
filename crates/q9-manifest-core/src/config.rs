//! Run configuration loaded from TOML.
//!
//! ```toml
//! [paths]
//! database = "db.json"
//! blob = "Q9.IM_"
//! output = "recipes.json"
//!
//! [layout]
//! encoding = "big5"
//! symbol_anchor = "１＝≠±"
//! surname_anchor = "麥趙楊黃"
//! static_keys = ["01", "02", "03", "04", "05", "06", "07", "08", "09"]
//! trial_lengths = [10, 6, 4]
//!
//! [[layout.glyphs]]
//! offset = 320998
//! length = 9
//!
//! [output]
//! style = "full"
//! pretty = false
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::manifest::ManifestStyle;
use crate::offset::GlyphRegion;

/// Symbol block landmark: fullwidth digit one, equals, not-equal, plus-minus.
pub const DEFAULT_SYMBOL_ANCHOR: &str = "１＝≠±";
/// Surname block landmark: the first four surnames of the general block.
pub const DEFAULT_SURNAME_ANCHOR: &str = "麥趙楊黃";
/// Prefix lengths tried by the global search, longest first.
pub const DEFAULT_TRIAL_LENGTHS: [usize; 3] = [10, 6, 4];
/// Radical region starting at Big5 code A3A5.
pub const DEFAULT_GLYPH_REGION: GlyphRegion = GlyphRegion {
    offset: 320_998,
    length: 9,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.layout.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Ordered JSON object of key -> text
    pub database: PathBuf,
    /// Legacy binary resource file
    pub blob: PathBuf,
    /// Manifest destination
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("db.json"),
            blob: PathBuf::from("Q9.IM_"),
            output: PathBuf::from("recipes.json"),
        }
    }
}

/// Knowledge about the legacy blob layout consumed by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// WHATWG label of the legacy encoding
    pub encoding: String,
    pub symbol_anchor: String,
    pub surname_anchor: String,
    /// Keys laid out back to back from the symbol anchor, in order
    pub static_keys: Vec<String>,
    pub trial_lengths: Vec<usize>,
    pub glyphs: Vec<GlyphRegion>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            encoding: "big5".to_string(),
            symbol_anchor: DEFAULT_SYMBOL_ANCHOR.to_string(),
            surname_anchor: DEFAULT_SURNAME_ANCHOR.to_string(),
            static_keys: (1..=9).map(|n| format!("{:02}", n)).collect(),
            trial_lengths: DEFAULT_TRIAL_LENGTHS.to_vec(),
            glyphs: vec![DEFAULT_GLYPH_REGION],
        }
    }
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol_anchor.is_empty() {
            return Err(Error::InvalidConfig("symbol_anchor is empty".to_string()));
        }
        if self.surname_anchor.is_empty() {
            return Err(Error::InvalidConfig("surname_anchor is empty".to_string()));
        }
        if self.trial_lengths.is_empty() {
            return Err(Error::InvalidConfig("trial_lengths is empty".to_string()));
        }
        if self.trial_lengths.contains(&0) {
            return Err(Error::InvalidConfig(
                "trial_lengths must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_static_key(&self, key: &str) -> bool {
        self.static_keys.iter().any(|k| k == key)
    }
}

/// Builder for LayoutConfig
#[derive(Debug, Clone, Default)]
pub struct LayoutConfigBuilder {
    encoding: Option<String>,
    symbol_anchor: Option<String>,
    surname_anchor: Option<String>,
    static_keys: Option<Vec<String>>,
    trial_lengths: Option<Vec<usize>>,
    glyphs: Option<Vec<GlyphRegion>>,
}

impl LayoutConfigBuilder {
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    pub fn symbol_anchor(mut self, literal: impl Into<String>) -> Self {
        self.symbol_anchor = Some(literal.into());
        self
    }

    pub fn surname_anchor(mut self, literal: impl Into<String>) -> Self {
        self.surname_anchor = Some(literal.into());
        self
    }

    pub fn static_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.static_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn trial_lengths(mut self, lengths: impl Into<Vec<usize>>) -> Self {
        self.trial_lengths = Some(lengths.into());
        self
    }

    pub fn glyphs(mut self, glyphs: impl Into<Vec<GlyphRegion>>) -> Self {
        self.glyphs = Some(glyphs.into());
        self
    }

    /// Build the configuration; the result is validated.
    pub fn build(self) -> Result<LayoutConfig> {
        let defaults = LayoutConfig::default();
        let config = LayoutConfig {
            encoding: self.encoding.unwrap_or(defaults.encoding),
            symbol_anchor: self.symbol_anchor.unwrap_or(defaults.symbol_anchor),
            surname_anchor: self.surname_anchor.unwrap_or(defaults.surname_anchor),
            static_keys: self.static_keys.unwrap_or(defaults.static_keys),
            trial_lengths: self.trial_lengths.unwrap_or(defaults.trial_lengths),
            glyphs: self.glyphs.unwrap_or(defaults.glyphs),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Manifest serialization options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub style: ManifestStyle,
    pub pretty: bool,
}
