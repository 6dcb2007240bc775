//! Per-instance UI state: dismissed and expanded item ids.
//!
//! Both trackers live only as long as the mounted panel that owns them.
//! Nothing here is persisted.

use std::collections::BTreeSet;

use crate::domain::ItemId;

/// Ids the user has hidden.
///
/// The set only grows. There is no undismiss; a fresh tracker (on remount)
/// is the only way back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissalTracker {
    dismissed: BTreeSet<ItemId>,
}

impl DismissalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide an item. Returns `true` if it was not already dismissed.
    pub fn dismiss(&mut self, id: ItemId) -> bool {
        self.dismissed.insert(id)
    }

    pub fn is_dismissed(&self, id: &ItemId) -> bool {
        self.dismissed.contains(id)
    }

    /// Dismissed ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.dismissed.iter()
    }

    pub fn len(&self) -> usize {
        self.dismissed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty()
    }
}

impl FromIterator<ItemId> for DismissalTracker {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self {
            dismissed: iter.into_iter().collect(),
        }
    }
}

/// Ids of disclosure groups the user has opened.
///
/// Unlike dismissal this is a toggle. It never affects which items are
/// selected, only how the view presents them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionTracker {
    expanded: BTreeSet<ItemId>,
}

impl ExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, id: ItemId) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: &ItemId) {
        self.expanded.remove(id);
    }

    /// Flip the state. Returns `true` if the item is now expanded.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: &ItemId) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
