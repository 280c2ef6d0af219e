//! Ordered key/value entry database.
//!
//! The source document is a JSON object whose key order is load-bearing:
//! the sequential fallback resolver extrapolates from one key to the next in
//! definition order. `serde_json` is built with `preserve_order` so the map
//! iterates in insertion order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Length of the value in characters (one legacy character each).
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Database {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Database {
    /// Build from entries in iteration order. A repeated key keeps its first
    /// position and takes the later value, as a JSON object would.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut db = Self::default();
        for entry in entries {
            match db.index.get(&entry.key) {
                Some(&pos) => db.entries[pos].value = entry.value,
                None => {
                    db.index.insert(entry.key.clone(), db.entries.len());
                    db.entries.push(entry);
                }
            }
        }
        db
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        let Value::Object(map) = document else {
            return Err(Error::InvalidDatabase(
                "top-level value must be an object".to_string(),
            ));
        };

        let entries = map
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(text) => Ok(Entry { key, value: text }),
                other => Err(Error::InvalidDatabase(format!(
                    "value for key '{}' must be a string, got {}",
                    key, other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_entries(entries))
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
