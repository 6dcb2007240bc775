//! Content selection engine.
//!
//! This module contains:
//! - ContextFilter: section rules with the high-priority escape-hatch
//! - Search: case-insensitive query matching
//! - Dismissal: per-instance dismissed/expanded state
//! - Selector: the composed pipeline
//! - Panel: mounted instance tying catalog, context and state together

pub mod context_filter;
pub mod dismissal;
pub mod panel;
pub mod search;
pub mod selector;

// Re-export commonly used types
pub use context_filter::{filter_by_context, ContextRules};
pub use dismissal::{DismissalTracker, ExpansionTracker};
pub use panel::{ActionHandler, Panel, PanelEntry, PanelView, SelectedAction};
pub use search::filter_by_query;
pub use selector::Selector;
