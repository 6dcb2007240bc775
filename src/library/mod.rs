//! Content catalogs for dashboard panels.
//!
//! Catalogs come from a [`CatalogSource`]: either the built-in data shipped
//! with each panel, or a YAML/JSON file on disk.
//!
//! # File Layout
//!
//! ```text
//! <catalog_dir>/
//! ├── help.yaml              # Contextual help topics
//! ├── recommendations.yaml   # Smart recommendations
//! └── disclosure.json        # Progressive disclosure groups
//! ```

pub mod builtin;
pub mod catalog;

pub use builtin::PanelKind;
pub use catalog::{
    Catalog, CatalogError, CatalogSource, FileCatalogSource, StaticCatalogSource,
    CATALOG_VERSION,
};
