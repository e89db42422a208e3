use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Translation provider seam. `translate` is total: whatever the lookup
/// policy, the caller always gets a displayable string back.
pub trait Translations: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat key → string catalog. Missing keys resolve to the key itself, so a
/// forgotten entry shows up on screen instead of panicking.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// English defaults covering every key the built-in components consume.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("result.title", "Result");
        catalog.insert("result.copy", "Copy");
        catalog.insert("result.copied", "Copied!");
        catalog.insert("result.regenerate", "Regenerate");
        catalog.insert("result.share", "Share");
        catalog.insert("favorites.add", "Add to favorites");
        catalog.insert("favorites.remove", "Remove from favorites");
        catalog
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlays `other` on top of this catalog; later entries win.
    pub fn merge(&mut self, other: Catalog) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translations for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
