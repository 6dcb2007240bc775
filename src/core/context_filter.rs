//! Section-based filtering.
//!
//! An item is relevant to a section when its category matches, when one of
//! its tags equals the section, or when it is high priority. Containers are
//! pruned by their children: a container survives only if at least one child
//! does, regardless of its own category or priority.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ContentItem, Priority, Section, DASHBOARD};

/// Per-catalog section rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRules {
    /// Sections where every item passes unfiltered
    #[serde(default = "default_show_all")]
    pub show_all: Vec<Section>,

    /// Extra categories that count as a match for a section
    #[serde(default)]
    pub section_categories: BTreeMap<Section, Vec<String>>,
}

fn default_show_all() -> Vec<Section> {
    vec![Section::dashboard()]
}

impl Default for ContextRules {
    fn default() -> Self {
        Self {
            show_all: default_show_all(),
            section_categories: BTreeMap::new(),
        }
    }
}

impl ContextRules {
    /// Add a show-all section
    pub fn with_show_all(mut self, section: Section) -> Self {
        if !self.show_all.contains(&section) {
            self.show_all.push(section);
        }
        self
    }

    /// Whitelist extra categories for a section
    pub fn with_section_categories(
        mut self,
        section: Section,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.section_categories
            .entry(section)
            .or_default()
            .extend(categories.into_iter().map(Into::into));
        self
    }

    /// Whether the section bypasses filtering entirely.
    ///
    /// The dashboard always does, whatever `show_all` lists.
    pub fn shows_all(&self, section: &Section) -> bool {
        section.as_str() == DASHBOARD || self.show_all.contains(section)
    }

    /// Whether a leaf item is relevant to the section
    pub fn matches(&self, item: &ContentItem, section: &Section) -> bool {
        if item.priority == Priority::High {
            return true;
        }

        // Sections are lowercase; catalog text may not be
        let name = section.as_str();
        if item.category.eq_ignore_ascii_case(name)
            || item.tags.iter().any(|t| t.eq_ignore_ascii_case(name))
        {
            return true;
        }

        self.section_categories.get(section).is_some_and(|cats| {
            cats.iter().any(|c| c.eq_ignore_ascii_case(&item.category))
        })
    }
}

/// Filter items by section, recursing into containers
pub fn filter_by_context(
    items: &[ContentItem],
    section: &Section,
    rules: &ContextRules,
) -> Vec<ContentItem> {
    if rules.shows_all(section) {
        return items.to_vec();
    }

    items
        .iter()
        .filter_map(|item| filter_item(item, section, rules))
        .collect()
}

fn filter_item(item: &ContentItem, section: &Section, rules: &ContextRules) -> Option<ContentItem> {
    if item.is_container() {
        let children: Vec<ContentItem> = item
            .children
            .iter()
            .filter_map(|child| filter_item(child, section, rules))
            .collect();

        if children.is_empty() {
            return None;
        }

        let mut pruned = item.clone();
        pruned.children = children;
        return Some(pruned);
    }

    rules.matches(item, section).then(|| item.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;

    fn section(s: &str) -> Section {
        Section::parse(s).unwrap()
    }

    fn leaf(id: &str, category: &str, priority: Priority) -> ContentItem {
        ContentItem::new(id, id, ItemKind::Info, category, priority)
    }

    #[test]
    fn test_category_and_tag_match() {
        let items = vec![
            leaf("a", "compliance", Priority::Low),
            leaf("b", "analytics", Priority::Low).with_tag("compliance"),
            leaf("c", "analytics", Priority::Medium),
        ];

        let result = filter_by_context(&items, &section("compliance"), &ContextRules::default());
        let ids: Vec<_> = result.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let items = vec![leaf("a", "analytics", Priority::Low).with_tag("compliance-reports")];
        let result = filter_by_context(&items, &section("compliance"), &ContextRules::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_section_keeps_only_high_priority() {
        let items = vec![
            leaf("a", "verification", Priority::High),
            leaf("b", "verification", Priority::Medium),
        ];

        let result = filter_by_context(&items, &section("nowhere"), &ContextRules::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "a");
    }

    #[test]
    fn test_section_categories_whitelist() {
        let rules = ContextRules::default()
            .with_section_categories(section("verification"), ["kyc", "documents"]);
        let items = vec![
            leaf("a", "kyc", Priority::Low),
            leaf("b", "documents", Priority::Low),
            leaf("c", "billing", Priority::Low),
        ];

        let result = filter_by_context(&items, &section("verification"), &rules);
        assert_eq!(result.len(), 2);

        // The whitelist is keyed by section; other sections do not inherit it
        let result = filter_by_context(&items, &section("kyc"), &rules);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_extra_show_all_section() {
        let rules = ContextRules::default().with_show_all(section("overview"));
        let items = vec![leaf("a", "billing", Priority::Low)];

        assert_eq!(filter_by_context(&items, &section("overview"), &rules), items);
        assert!(filter_by_context(&items, &section("settings"), &rules).is_empty());
    }

    #[test]
    fn test_container_ignores_own_fields() {
        // A high-priority container with no matching children is dropped
        let group = leaf("group", "compliance", Priority::High)
            .with_child(leaf("x", "billing", Priority::Low));

        let result = filter_by_context(&[group], &section("compliance"), &ContextRules::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_dashboard_bypass_survives_show_all_override() {
        let items = vec![leaf("a", "billing", Priority::Low)];

        for yaml in ["show_all: [overview]", "show_all: []"] {
            let rules: ContextRules = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(
                filter_by_context(&items, &Section::dashboard(), &rules),
                items,
                "rules: {}",
                yaml
            );
        }
    }

    #[test]
    fn test_mixed_case_catalog_text_matches() {
        let rules = ContextRules::default()
            .with_section_categories(section("verification"), ["KYC"]);
        let items = vec![
            leaf("a", "Compliance", Priority::Low),
            leaf("b", "analytics", Priority::Low).with_tag("COMPLIANCE"),
            leaf("c", "kyc", Priority::Low),
        ];

        let result = filter_by_context(&items, &section("Compliance"), &rules);
        let ids: Vec<_> = result.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let result = filter_by_context(&items, &section("verification"), &rules);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "c");
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let yaml = r#"
section_categories:
  verification: [kyc]
"#;
        let rules: ContextRules = serde_yaml::from_str(yaml).unwrap();
        assert!(rules.shows_all(&Section::dashboard()));
        assert_eq!(
            rules.section_categories.get(&section("verification")),
            Some(&vec!["kyc".to_string()])
        );
    }
}
