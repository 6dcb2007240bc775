//! Content items shown by dashboard panels.
//!
//! A [`ContentItem`] is the unit of display for every panel: a help topic,
//! a recommendation, or a disclosure group with nested children.

use serde::{Deserialize, Serialize};

/// Stable item identifier, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item ID from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Presentation tag for an item. Never used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Info,
    Warning,
    Success,
    Action,
    Guide,
    Video,
    Faq,
    Contact,
    Tip,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemKind::Info => "info",
            ItemKind::Warning => "warning",
            ItemKind::Success => "success",
            ItemKind::Action => "action",
            ItemKind::Guide => "guide",
            ItemKind::Video => "video",
            ItemKind::Faq => "faq",
            ItemKind::Contact => "contact",
            ItemKind::Tip => "tip",
        };
        write!(f, "{}", s)
    }
}

/// Item priority.
///
/// Variant order is the display rank: `High` sorts before `Medium`,
/// which sorts before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" | "med" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => anyhow::bail!("Unknown priority: {}", s),
        }
    }
}

/// Opaque action reference handed back to the host on activation.
///
/// The target is never interpreted here; the host decides how to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAction {
    /// Button label
    pub label: String,

    /// Host-defined target (route, URL, command name)
    pub target: String,
}

impl ItemAction {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A single displayable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Identity key for dismissal and expansion state
    pub id: ItemId,

    /// Display title
    pub title: String,

    /// Display body text
    #[serde(default)]
    pub description: String,

    /// Presentation tag
    pub kind: ItemKind,

    /// Free-form grouping, matched against the current section
    pub category: String,

    /// Filter escape-hatch and sort key
    pub priority: Priority,

    /// Keywords matched by section and search
    #[serde(default)]
    pub tags: Vec<String>,

    /// Nested items (disclosure groups)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentItem>,

    /// Optional host action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
}

impl ContentItem {
    /// Create a new item with no tags, children, or action
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        kind: ItemKind,
        category: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            category: category.into(),
            priority,
            tags: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add a nested child
    pub fn with_child(mut self, child: ContentItem) -> Self {
        self.children.push(child);
        self
    }

    /// Set the host action
    pub fn with_action(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.action = Some(ItemAction::new(label, target));
        self
    }

    /// Whether this item groups nested children
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find this item or a descendant by ID
    pub fn find(&self, id: &ItemId) -> Option<&ContentItem> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}
