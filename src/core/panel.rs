//! Mounted panel instances.
//!
//! A [`Panel`] owns everything one on-screen panel needs: its catalog, its
//! selector, the current context and its dismissal/expansion state. The
//! state lives exactly as long as the instance; [`Panel::remount`] starts
//! over with empty trackers.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::context_filter::ContextRules;
use super::dismissal::{DismissalTracker, ExpansionTracker};
use super::selector::Selector;
use crate::domain::{ContentItem, ItemAction, ItemId, Section, SelectionContext};
use crate::library::{Catalog, CatalogSource, PanelKind};

/// Payload handed to the host when an actionable item is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedAction {
    pub id: ItemId,
    pub title: String,
    pub action: ItemAction,
}

/// Host callback for activated items
pub trait ActionHandler {
    fn on_action(&mut self, selected: SelectedAction);
}

impl<F> ActionHandler for F
where
    F: FnMut(SelectedAction),
{
    fn on_action(&mut self, selected: SelectedAction) {
        self(selected)
    }
}

/// One displayed item plus its disclosure state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelEntry {
    #[serde(flatten)]
    pub item: ContentItem,
    pub expanded: bool,
}

/// What the view layer renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub panel: PanelKind,
    pub context: SelectionContext,
    pub entries: Vec<PanelEntry>,

    /// Set exactly when `entries` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

impl PanelView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A mounted panel
#[derive(Debug)]
pub struct Panel {
    kind: PanelKind,
    instance_id: Uuid,
    mounted_at: DateTime<Utc>,
    source_name: String,
    catalog: Catalog,
    selector: Selector,
    context: SelectionContext,
    dismissed: DismissalTracker,
    expanded: ExpansionTracker,
    empty_state: String,
}

impl Panel {
    /// Load and validate a catalog, then mount with empty state
    pub async fn mount(
        kind: PanelKind,
        source: &dyn CatalogSource,
        rules: ContextRules,
    ) -> Result<Self> {
        let catalog = source
            .load()
            .await
            .with_context(|| format!("Failed to load {} catalog from {}", kind, source.name()))?;

        catalog
            .validate()
            .with_context(|| format!("Invalid {} catalog from {}", kind, source.name()))?;

        let panel = Self {
            kind,
            instance_id: Uuid::new_v4(),
            mounted_at: Utc::now(),
            source_name: source.name().to_string(),
            catalog,
            selector: Selector::new(rules),
            context: SelectionContext::default(),
            dismissed: DismissalTracker::new(),
            expanded: ExpansionTracker::new(),
            empty_state: kind.default_empty_state().to_string(),
        };

        info!(
            panel = %panel.kind,
            instance = %panel.instance_id,
            source = %panel.source_name,
            items = panel.catalog.len(),
            "Panel mounted"
        );

        Ok(panel)
    }

    /// Override the empty-state message
    pub fn with_empty_state(mut self, message: impl Into<String>) -> Self {
        self.empty_state = message.into();
        self
    }

    /// Start with a given context
    pub fn with_context(mut self, context: SelectionContext) -> Self {
        self.context = context;
        self
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn mounted_at(&self) -> DateTime<Utc> {
        self.mounted_at
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &ContextRules {
        self.selector.rules()
    }

    pub fn context(&self) -> &SelectionContext {
        &self.context
    }

    pub fn dismissed(&self) -> &DismissalTracker {
        &self.dismissed
    }

    pub fn expanded(&self) -> &ExpansionTracker {
        &self.expanded
    }

    pub fn empty_state(&self) -> &str {
        &self.empty_state
    }

    pub fn set_context(&mut self, context: SelectionContext) {
        self.context = context;
    }

    pub fn set_section(&mut self, section: Section) {
        self.context.section = section;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.context.query = query.into();
    }

    /// Hide an item until remount.
    ///
    /// Returns `true` only when the dismissal changed state. Unknown ids
    /// are ignored.
    pub fn dismiss(&mut self, id: &ItemId) -> bool {
        if !self.catalog.contains(id) {
            debug!(panel = %self.kind, id = %id, "Ignoring dismissal of unknown item");
            return false;
        }

        let added = self.dismissed.dismiss(id.clone());
        if added {
            info!(
                panel = %self.kind,
                instance = %self.instance_id,
                id = %id,
                "Item dismissed"
            );
        }
        added
    }

    /// Open a disclosure group; opening an open group keeps it open.
    ///
    /// Returns false for unknown ids.
    pub fn expand(&mut self, id: &ItemId) -> bool {
        if !self.catalog.contains(id) {
            debug!(panel = %self.kind, id = %id, "Ignoring expand of unknown item");
            return false;
        }
        self.expanded.expand(id.clone());
        true
    }

    /// Flip a disclosure group open or closed.
    ///
    /// Returns the new expanded state; unknown ids stay collapsed.
    pub fn toggle_expanded(&mut self, id: &ItemId) -> bool {
        if !self.catalog.contains(id) {
            debug!(panel = %self.kind, id = %id, "Ignoring toggle of unknown item");
            return false;
        }
        self.expanded.toggle(id.clone())
    }

    /// Run the selection pipeline against the current state
    pub fn items(&self) -> Vec<ContentItem> {
        self.selector
            .select(&self.catalog.items, &self.context, &self.dismissed)
    }

    /// Build the view model for the current state
    pub fn view(&self) -> PanelView {
        let entries: Vec<PanelEntry> = self
            .items()
            .into_iter()
            .map(|item| {
                let expanded = self.expanded.is_expanded(&item.id);
                PanelEntry { item, expanded }
            })
            .collect();

        let empty_state = entries.is_empty().then(|| self.empty_state.clone());

        PanelView {
            panel: self.kind,
            context: self.context.clone(),
            entries,
            empty_state,
        }
    }

    /// Activate a visible item.
    ///
    /// Looks the id up among the currently selected items (including
    /// children of visible groups). Calls the handler and returns `true`
    /// if the item carries an action.
    pub fn activate(&self, id: &ItemId, handler: &mut dyn ActionHandler) -> bool {
        let visible = self.items();
        let Some(item) = visible.iter().find_map(|item| item.find(id)) else {
            debug!(panel = %self.kind, id = %id, "Activated item is not visible");
            return false;
        };

        let Some(action) = item.action.clone() else {
            debug!(panel = %self.kind, id = %id, "Activated item has no action");
            return false;
        };

        handler.on_action(SelectedAction {
            id: item.id.clone(),
            title: item.title.clone(),
            action,
        });
        true
    }

    /// Reset all per-instance state, as if freshly mounted
    pub fn remount(&mut self) {
        self.instance_id = Uuid::new_v4();
        self.mounted_at = Utc::now();
        self.context = SelectionContext::default();
        self.dismissed = DismissalTracker::new();
        self.expanded = ExpansionTracker::new();

        info!(panel = %self.kind, instance = %self.instance_id, "Panel remounted");
    }
}
