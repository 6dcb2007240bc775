//! Domain types for panel content selection.
//!
//! This module contains the core data structures:
//! - Item: content items, priorities and host actions
//! - Section: validated section names and the selection context

pub mod item;
pub mod section;

// Re-export commonly used types
pub use item::{ContentItem, ItemAction, ItemId, ItemKind, Priority};
pub use section::{Section, SectionError, SelectionContext, DASHBOARD};
