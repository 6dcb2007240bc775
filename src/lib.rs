//! panelkit - Contextual content selection for dashboard panels
//!
//! The identity-verification dashboard has three panels that pick what to
//! show from a fixed catalog: contextual help, smart recommendations and
//! progressive disclosure. They share one selection engine.
//!
//! # Pipeline
//!
//! Every selection is recomputed from the full catalog:
//! - Context filter: keep items whose category or tag matches the current
//!   section, plus all high-priority items
//! - Search filter: case-insensitive substring match on title, description
//!   and tags
//! - Dismissal: drop items hidden during this mount
//! - Stable sort by priority
//!
//! # Modules
//!
//! - `domain`: Data structures (ContentItem, Section, SelectionContext)
//! - `core`: Selection logic (filters, trackers, Selector, Panel)
//! - `library`: Catalog documents, sources and built-in catalogs
//! - `config`: Config file discovery and panel overrides
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # What does the recommendations panel show on the compliance page?
//! panelkit select --panel recommendations --section compliance
//!
//! # Search help topics
//! panelkit select --panel help --query passport
//!
//! # Print the action for an item
//! panelkit activate --panel recommendations review-pending
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use self::core::{
    ActionHandler, ContextRules, DismissalTracker, ExpansionTracker, Panel, PanelView,
    SelectedAction, Selector,
};
pub use domain::{ContentItem, ItemAction, ItemId, ItemKind, Priority, Section, SelectionContext};
pub use library::{Catalog, CatalogError, CatalogSource, FileCatalogSource, PanelKind, StaticCatalogSource};
