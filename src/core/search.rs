//! Free-text search over top-level items.

use crate::domain::ContentItem;

/// Filter items by a case-insensitive substring query.
///
/// An empty or whitespace-only query returns the input unchanged. Only
/// top-level fields are searched; children of a container are not.
pub fn filter_by_query(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    let query = query.trim();
    if query.is_empty() {
        return items.to_vec();
    }

    let query_lower = query.to_lowercase();

    items
        .iter()
        .filter(|item| matches_query(item, &query_lower))
        .cloned()
        .collect()
}

/// `query_lower` must already be lowercased
pub fn matches_query(item: &ContentItem, query_lower: &str) -> bool {
    item.title.to_lowercase().contains(query_lower)
        || item.description.to_lowercase().contains(query_lower)
        || item.tags.iter().any(|t| t.to_lowercase().contains(query_lower))
}
