//! Selection Pipeline Integration Tests
//!
//! Tests for context filtering, search, dismissal and ordering.

use panelkit::core::{filter_by_context, filter_by_query, ContextRules, DismissalTracker, Selector};
use panelkit::domain::{ContentItem, ItemId, ItemKind, Priority, Section, SelectionContext};
use panelkit::library::PanelKind;

fn section(s: &str) -> Section {
    Section::parse(s).unwrap()
}

fn item(id: &str, priority: Priority, category: &str) -> ContentItem {
    ContentItem::new(id, format!("Item {}", id), ItemKind::Info, category, priority)
}

/// Two-item catalog used by the scenario tests
fn scenario_catalog() -> Vec<ContentItem> {
    vec![
        item("p1", Priority::High, "verification"),
        item("p2", Priority::Low, "compliance"),
    ]
}

fn ids(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_dashboard_is_identity() {
    for kind in PanelKind::ALL {
        let catalog = kind.builtin_items();
        let result = filter_by_context(&catalog, &Section::dashboard(), &kind.default_rules());
        assert_eq!(result, catalog, "{} catalog changed on dashboard", kind);
    }
}

#[test]
fn test_high_priority_survives_every_section() {
    let catalog = vec![
        item("urgent", Priority::High, "billing"),
        item("routine", Priority::Low, "billing"),
    ];
    let rules = ContextRules::default();

    for name in ["verification", "compliance", "analytics", "settings", "unheard-of"] {
        let result = filter_by_context(&catalog, &section(name), &rules);
        assert_eq!(ids(&result), vec!["urgent"], "section {}", name);
    }
}

#[test]
fn test_empty_query_is_identity() {
    let catalog = PanelKind::Help.builtin_items();
    assert_eq!(filter_by_query(&catalog, ""), catalog);
}

#[test]
fn test_empty_catalog_never_fails() {
    let selector = Selector::default();
    let dismissed = DismissalTracker::new();

    for ctx in [
        SelectionContext::default(),
        SelectionContext::for_section(section("nowhere")),
        SelectionContext::for_section(section("compliance")).with_query("aml"),
    ] {
        assert!(selector.select(&[], &ctx, &dismissed).is_empty());
    }
}

#[test]
fn test_dismissal_is_monotone() {
    let catalog = PanelKind::Recommendations.builtin_items();
    let selector = Selector::new(PanelKind::Recommendations.default_rules());
    let ctx = SelectionContext::default();

    let mut dismissed = DismissalTracker::new();
    let mut previous = selector.select(&catalog, &ctx, &dismissed).len();

    for entry in &catalog {
        dismissed.dismiss(entry.id.clone());
        let current = selector.select(&catalog, &ctx, &dismissed).len();
        assert!(current <= previous);
        previous = current;
    }

    assert_eq!(previous, 0);
}

#[test]
fn test_sort_preserves_catalog_order_for_ties() {
    let catalog = PanelKind::Help.builtin_items();
    let result = Selector::new(PanelKind::Help.default_rules()).select(
        &catalog,
        &SelectionContext::default(),
        &DismissalTracker::new(),
    );

    for pair in result.windows(2) {
        assert!(pair[0].priority <= pair[1].priority);
        if pair[0].priority == pair[1].priority {
            let a = catalog.iter().position(|i| i.id == pair[0].id).unwrap();
            let b = catalog.iter().position(|i| i.id == pair[1].id).unwrap();
            assert!(a < b, "{} should precede {}", pair[0].id, pair[1].id);
        }
    }
}

#[test]
fn test_scenario_a_high_priority_escape_hatch() {
    let result = Selector::default().select(
        &scenario_catalog(),
        &SelectionContext::for_section(section("compliance")),
        &DismissalTracker::new(),
    );
    assert_eq!(ids(&result), vec!["p1", "p2"]);
}

#[test]
fn test_scenario_b_unmatched_query() {
    let result = Selector::default().select(
        &scenario_catalog(),
        &SelectionContext::for_section(section("compliance")).with_query("zzz"),
        &DismissalTracker::new(),
    );
    assert!(result.is_empty());
}

#[test]
fn test_scenario_c_dismissal_on_dashboard() {
    let mut dismissed = DismissalTracker::new();
    dismissed.dismiss(ItemId::from("p1"));

    let result = Selector::default().select(
        &scenario_catalog(),
        &SelectionContext::default(),
        &dismissed,
    );
    assert_eq!(ids(&result), vec!["p2"]);
}

#[test]
fn test_scenario_d_partial_children() {
    let parent = item("parent", Priority::Low, "settings")
        .with_child(item("match", Priority::Low, "compliance"))
        .with_child(item("other", Priority::Low, "billing"));

    let result = Selector::default().select(
        &[parent],
        &SelectionContext::for_section(section("compliance")),
        &DismissalTracker::new(),
    );

    assert_eq!(ids(&result), vec!["parent"]);
    assert_eq!(ids(&result[0].children), vec!["match"]);
}

#[test]
fn test_search_does_not_descend_into_children() {
    // Context filtering recurses, search does not: a child-only match is lost
    let parent = item("security", Priority::Low, "settings")
        .with_child(item("two-factor", Priority::Low, "settings").with_tag("2fa"));

    let result = Selector::default().select(
        &[parent],
        &SelectionContext::for_section(section("settings")).with_query("2fa"),
        &DismissalTracker::new(),
    );
    assert!(result.is_empty());
}

#[test]
fn test_builtin_recommendations_for_compliance() {
    let catalog = PanelKind::Recommendations.builtin_items();
    let result = Selector::new(PanelKind::Recommendations.default_rules()).select(
        &catalog,
        &SelectionContext::for_section(section("compliance")),
        &DismissalTracker::new(),
    );

    assert_eq!(
        ids(&result),
        vec![
            "enable-liveness",
            "review-pending",
            "update-aml-lists",
            "retention-policy"
        ]
    );
}

#[test]
fn test_builtin_help_verification_whitelist() {
    let catalog = PanelKind::Help.builtin_items();
    let result = Selector::new(PanelKind::Help.default_rules()).select(
        &catalog,
        &SelectionContext::for_section(section("verification")),
        &DismissalTracker::new(),
    );

    // "kyc" category is whitelisted for verification; "fraud-signals" matches by tag
    assert_eq!(
        ids(&result),
        vec![
            "getting-started",
            "contact-support",
            "document-upload",
            "liveness-check",
            "rejection-reasons",
            "fraud-signals"
        ]
    );
}

#[test]
fn test_builtin_disclosure_settings() {
    let catalog = PanelKind::Disclosure.builtin_items();
    let result = Selector::new(PanelKind::Disclosure.default_rules()).select(
        &catalog,
        &SelectionContext::for_section(section("settings")),
        &DismissalTracker::new(),
    );

    assert_eq!(ids(&result), vec!["whats-new", "account-security"]);
    assert_eq!(
        ids(&result[1].children),
        vec!["two-factor", "single-sign-on", "api-access"]
    );
}
