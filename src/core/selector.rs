//! Selection pipeline.
//!
//! Every call recomputes from the full catalog:
//! 1. Context filter (section rules, recursive)
//! 2. Search filter (top level)
//! 3. Dismissal exclusion (top level)
//! 4. Stable sort by priority, high first

use tracing::debug;

use super::context_filter::{filter_by_context, ContextRules};
use super::dismissal::DismissalTracker;
use super::search::filter_by_query;
use crate::domain::{ContentItem, SelectionContext};

/// Composes the filters for one catalog's rules
#[derive(Debug, Clone, Default)]
pub struct Selector {
    rules: ContextRules,
}

impl Selector {
    pub fn new(rules: ContextRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ContextRules {
        &self.rules
    }

    /// Compute the ordered items to display
    pub fn select(
        &self,
        catalog: &[ContentItem],
        context: &SelectionContext,
        dismissed: &DismissalTracker,
    ) -> Vec<ContentItem> {
        let in_context = filter_by_context(catalog, &context.section, &self.rules);
        let matched = filter_by_query(&in_context, &context.query);

        let mut selected: Vec<ContentItem> = matched
            .into_iter()
            .filter(|item| !dismissed.is_dismissed(&item.id))
            .collect();

        // sort_by_key is stable, so equal priorities keep catalog order
        selected.sort_by_key(|item| item.priority);

        debug!(
            section = %context.section,
            query = %context.query,
            catalog = catalog.len(),
            in_context = in_context.len(),
            dismissed = dismissed.len(),
            selected = selected.len(),
            "Selection computed"
        );

        selected
    }
}
