//! Catalog documents and the sources that provide them.
//!
//! A catalog is a versioned, ordered list of items. Panels never construct
//! items themselves; they ask a [`CatalogSource`] for them, so the built-in
//! data can be swapped for a file (or later a remote fetch) without touching
//! the selection pipeline.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::domain::{ContentItem, ItemId};

/// Current catalog format version
pub const CATALOG_VERSION: u32 = 1;

/// A catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            version: CATALOG_VERSION,
            items: Vec::new(),
        }
    }

    /// Create a catalog from items
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        Self {
            version: CATALOG_VERSION,
            items,
        }
    }

    /// Parse a catalog from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse catalog YAML")
    }

    /// Parse a catalog from JSON content
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse catalog JSON")
    }

    /// Check ids and titles across the whole tree
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        validate_items(&self.items, &mut seen)
    }

    /// Find an item by ID at any nesting level
    pub fn find(&self, id: &ItemId) -> Option<&ContentItem> {
        self.items.iter().find_map(|item| item.find(id))
    }

    /// Whether an item exists at any nesting level
    pub fn contains(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Get the number of top-level items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_items(items: &[ContentItem], seen: &mut HashSet<ItemId>) -> Result<(), CatalogError> {
    for item in items {
        if item.id.as_str().trim().is_empty() {
            return Err(CatalogError::EmptyId {
                title: item.title.clone(),
            });
        }

        if item.title.trim().is_empty() {
            return Err(CatalogError::BlankTitle {
                id: item.id.to_string(),
            });
        }

        if !seen.insert(item.id.clone()) {
            return Err(CatalogError::DuplicateId {
                id: item.id.to_string(),
            });
        }

        validate_items(&item.children, seen)?;
    }

    Ok(())
}

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Item '{title}' has an empty id")]
    EmptyId { title: String },

    #[error("Item '{id}' has a blank title")]
    BlankTitle { id: String },

    #[error("Duplicate item id: {id}")]
    DuplicateId { id: String },
}

/// Provider of catalog items
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Load the catalog
    async fn load(&self) -> Result<Catalog>;
}

/// In-memory catalog, cloned on every load
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    name: String,
    catalog: Catalog,
}

impl StaticCatalogSource {
    pub fn new(name: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            name: name.into(),
            catalog: Catalog::from_items(items),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

/// Catalog read from a YAML or JSON file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    name: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Catalog> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", self.path.display()))?;

        let is_json = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Catalog::from_json(&content)
        } else {
            Catalog::from_yaml(&content)
        };

        catalog.with_context(|| format!("Invalid catalog file: {}", self.path.display()))
    }
}
