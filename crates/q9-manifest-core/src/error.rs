use thiserror::Error;

use crate::offset::AnchorKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Anchor '{kind}' ({literal:?}) not found in legacy blob")]
    MissingAnchor { kind: AnchorKind, literal: String },

    #[error("Anchor '{kind}' ({literal:?}) cannot be encoded as {encoding}")]
    UnencodableAnchor {
        kind: AnchorKind,
        literal: String,
        encoding: String,
    },

    #[error("Static key missing from database: {0}")]
    MissingStaticKey(String),

    #[error("Invalid database: {0}")]
    InvalidDatabase(String),

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
