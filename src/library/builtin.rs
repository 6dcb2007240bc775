//! Built-in catalogs for the three dashboard panels.
//!
//! Each panel kind owns a catalog, the section rules it is filtered with,
//! and the message shown when nothing is selected.

use serde::{Deserialize, Serialize};

use super::catalog::StaticCatalogSource;
use crate::core::ContextRules;
use crate::domain::{ContentItem, ItemKind, Priority, Section};

/// The panels that embed a selection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Contextual help widget
    Help,

    /// Smart recommendations panel
    Recommendations,

    /// Progressive disclosure panel
    Disclosure,
}

impl PanelKind {
    pub const ALL: [PanelKind; 3] = [
        PanelKind::Help,
        PanelKind::Recommendations,
        PanelKind::Disclosure,
    ];

    /// Short name, also used as the catalog file stem
    pub fn name(self) -> &'static str {
        match self {
            PanelKind::Help => "help",
            PanelKind::Recommendations => "recommendations",
            PanelKind::Disclosure => "disclosure",
        }
    }

    /// Built-in catalog items
    pub fn builtin_items(self) -> Vec<ContentItem> {
        match self {
            PanelKind::Help => help_topics(),
            PanelKind::Recommendations => recommendations(),
            PanelKind::Disclosure => disclosure_groups(),
        }
    }

    /// Source serving the built-in catalog
    pub fn builtin_source(self) -> StaticCatalogSource {
        StaticCatalogSource::new(format!("builtin:{}", self.name()), self.builtin_items())
    }

    /// Section rules the built-in catalog is designed for
    pub fn default_rules(self) -> ContextRules {
        match self {
            PanelKind::Help => ContextRules::default()
                .with_section_categories(section(VERIFICATION), ["kyc", "documents"])
                .with_section_categories(section(SETTINGS), ["api"]),
            PanelKind::Recommendations => {
                ContextRules::default().with_show_all(section(OVERVIEW))
            }
            PanelKind::Disclosure => ContextRules::default()
                .with_section_categories(section(SETTINGS), ["security"]),
        }
    }

    /// Message shown when a selection is empty
    pub fn default_empty_state(self) -> &'static str {
        match self {
            PanelKind::Help => "No help topics match this page. Try a different search.",
            PanelKind::Recommendations => "You're all caught up. No recommendations right now.",
            PanelKind::Disclosure => "No settings match the current filter.",
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PanelKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "help" => Ok(PanelKind::Help),
            "recommendations" | "recs" => Ok(PanelKind::Recommendations),
            "disclosure" => Ok(PanelKind::Disclosure),
            _ => anyhow::bail!("Unknown panel: {}", s),
        }
    }
}

const OVERVIEW: &str = "overview";
const SETTINGS: &str = "settings";
const VERIFICATION: &str = "verification";

const _: () = assert!(Section::is_canonical(OVERVIEW));
const _: () = assert!(Section::is_canonical(SETTINGS));
const _: () = assert!(Section::is_canonical(VERIFICATION));

fn section(name: &'static str) -> Section {
    Section::from_static(name)
}

fn help_topics() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "getting-started",
            "Getting started with identity verification",
            ItemKind::Guide,
            "onboarding",
            Priority::High,
        )
        .with_description("Set up your first verification flow in under ten minutes.")
        .with_tags(["setup", "onboarding"])
        .with_action("Open guide", "docs://getting-started"),
        ContentItem::new(
            "document-upload",
            "Accepted identity documents",
            ItemKind::Guide,
            "verification",
            Priority::Medium,
        )
        .with_description("Passports, national ID cards and driving licences by country.")
        .with_tags(["documents", "passport", "id-card"]),
        ContentItem::new(
            "liveness-check",
            "How the liveness check works",
            ItemKind::Video,
            "verification",
            Priority::Medium,
        )
        .with_description("A three-minute walkthrough of selfie capture and spoof detection.")
        .with_tags(["liveness", "selfie", "biometrics"])
        .with_action("Watch video", "video://liveness-check"),
        ContentItem::new(
            "rejection-reasons",
            "Why was a verification rejected?",
            ItemKind::Faq,
            "kyc",
            Priority::Low,
        )
        .with_description("Common rejection codes and what the applicant can do next.")
        .with_tags(["rejection", "review"]),
        ContentItem::new(
            "aml-screening",
            "Configuring AML screening",
            ItemKind::Guide,
            "compliance",
            Priority::Medium,
        )
        .with_description("Choose sanctions, PEP and adverse-media lists for ongoing monitoring.")
        .with_tags(["aml", "sanctions", "pep"]),
        ContentItem::new(
            "data-retention",
            "Data retention and GDPR",
            ItemKind::Faq,
            "compliance",
            Priority::Low,
        )
        .with_description("How long applicant data is stored and how erasure requests are handled.")
        .with_tags(["gdpr", "retention", "privacy"]),
        ContentItem::new(
            "audit-export",
            "Exporting an audit trail",
            ItemKind::Guide,
            "compliance",
            Priority::Low,
        )
        .with_description("Download a signed CSV of every decision for your auditors.")
        .with_tags(["audit", "export", "analytics"])
        .with_action("Export now", "route:/compliance/audit/export"),
        ContentItem::new(
            "conversion-funnel",
            "Reading the conversion funnel",
            ItemKind::Video,
            "analytics",
            Priority::Medium,
        )
        .with_description("Where applicants drop off and how to spot friction.")
        .with_tags(["conversion", "funnel"]),
        ContentItem::new(
            "fraud-signals",
            "What counts as a fraud signal?",
            ItemKind::Faq,
            "analytics",
            Priority::Low,
        )
        .with_description("Device, document and behavioural signals behind the risk score.")
        .with_tags(["fraud", "risk", "verification"]),
        ContentItem::new(
            "api-keys",
            "Managing API keys and webhooks",
            ItemKind::Guide,
            "api",
            Priority::Medium,
        )
        .with_description("Create scoped keys and subscribe to verification events.")
        .with_tags(["webhooks", "integration"]),
        ContentItem::new(
            "payment-methods",
            "Updating payment methods",
            ItemKind::Faq,
            "billing",
            Priority::Low,
        )
        .with_description("Add a card, set a default and download past invoices.")
        .with_tags(["invoices", "cards", "payment"]),
        ContentItem::new(
            "contact-support",
            "Contact support",
            ItemKind::Contact,
            "support",
            Priority::High,
        )
        .with_description("Reach the verification support team, 24/7.")
        .with_tags(["help", "support"])
        .with_action("Start chat", "support://chat"),
    ]
}

fn recommendations() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "enable-liveness",
            "Enable liveness detection",
            ItemKind::Action,
            "verification",
            Priority::High,
        )
        .with_description("Spoofing attempts rose 12% this month. Liveness blocks most of them.")
        .with_tags(["fraud", "biometrics"])
        .with_action("Enable", "route:/settings/verification#liveness"),
        ContentItem::new(
            "review-pending",
            "23 verifications awaiting manual review",
            ItemKind::Warning,
            "verification",
            Priority::High,
        )
        .with_description("Applicants wait longer than 24 hours when the queue backs up.")
        .with_tags(["queue", "manual-review"])
        .with_action("Open queue", "route:/verification/queue"),
        ContentItem::new(
            "update-aml-lists",
            "Sanctions lists are 9 days old",
            ItemKind::Warning,
            "compliance",
            Priority::Medium,
        )
        .with_description("Refresh screening lists to stay within your compliance policy.")
        .with_tags(["aml", "sanctions"])
        .with_action("Refresh lists", "route:/compliance/screening"),
        ContentItem::new(
            "retention-policy",
            "Review your data retention policy",
            ItemKind::Info,
            "compliance",
            Priority::Low,
        )
        .with_description("Shorter retention windows reduce exposure under GDPR.")
        .with_tags(["gdpr", "retention"]),
        ContentItem::new(
            "mobile-drop-off",
            "Mobile applicants drop off at document capture",
            ItemKind::Info,
            "analytics",
            Priority::Medium,
        )
        .with_description("38% of mobile sessions end on the capture step.")
        .with_tags(["mobile", "conversion", "verification"])
        .with_action("View funnel", "route:/analytics/funnel"),
        ContentItem::new(
            "conversion-up",
            "Conversion up 4% week over week",
            ItemKind::Success,
            "analytics",
            Priority::Low,
        )
        .with_description("The new document guidance screen is paying off.")
        .with_tags(["conversion"]),
        ContentItem::new(
            "rotate-api-key",
            "Rotate an API key older than 180 days",
            ItemKind::Action,
            "settings",
            Priority::Medium,
        )
        .with_description("The production key was created more than six months ago.")
        .with_tags(["api", "security"])
        .with_action("Rotate key", "route:/settings/api-keys"),
        ContentItem::new(
            "backup-payment",
            "Add a backup payment method",
            ItemKind::Action,
            "billing",
            Priority::Low,
        )
        .with_description("Avoid interrupted service if your primary card fails.")
        .with_tags(["payment", "cards"])
        .with_action("Add card", "route:/billing/payment-methods/new"),
    ]
}

fn disclosure_groups() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "whats-new",
            "What's new: NFC passport reading",
            ItemKind::Tip,
            "announcements",
            Priority::High,
        )
        .with_description("Chip-based passport verification is now available on Android.")
        .with_tags(["nfc", "passport"]),
        ContentItem::new(
            "verification-settings",
            "Verification settings",
            ItemKind::Info,
            "verification",
            Priority::Medium,
        )
        .with_child(
            ContentItem::new(
                "document-types",
                "Accepted document types",
                ItemKind::Info,
                "verification",
                Priority::Medium,
            )
            .with_tags(["documents", "passport"]),
        )
        .with_child(
            ContentItem::new(
                "liveness-threshold",
                "Liveness confidence threshold",
                ItemKind::Warning,
                "verification",
                Priority::Low,
            )
            .with_tags(["biometrics", "risk"]),
        )
        .with_child(
            ContentItem::new(
                "manual-review-rules",
                "Manual review rules",
                ItemKind::Action,
                "compliance",
                Priority::Low,
            )
            .with_tags(["review", "verification"])
            .with_action("Edit rules", "route:/compliance/review-rules"),
        ),
        ContentItem::new(
            "compliance-controls",
            "Compliance controls",
            ItemKind::Info,
            "compliance",
            Priority::Medium,
        )
        .with_child(
            ContentItem::new(
                "aml-monitoring",
                "Ongoing AML monitoring",
                ItemKind::Info,
                "compliance",
                Priority::Medium,
            )
            .with_tags(["aml", "sanctions"]),
        )
        .with_child(
            ContentItem::new(
                "retention-window",
                "Retention window",
                ItemKind::Info,
                "compliance",
                Priority::Low,
            )
            .with_tags(["gdpr", "retention"]),
        )
        .with_child(
            ContentItem::new(
                "audit-log",
                "Audit log",
                ItemKind::Info,
                "compliance",
                Priority::Low,
            )
            .with_tags(["audit", "analytics"]),
        ),
        ContentItem::new(
            "account-security",
            "Account security",
            ItemKind::Info,
            "settings",
            Priority::Medium,
        )
        .with_child(
            ContentItem::new(
                "two-factor",
                "Two-factor authentication",
                ItemKind::Action,
                "security",
                Priority::High,
            )
            .with_tags(["2fa", "login"])
            .with_action("Set up 2FA", "route:/settings/security/2fa"),
        )
        .with_child(
            ContentItem::new(
                "single-sign-on",
                "Single sign-on",
                ItemKind::Info,
                "security",
                Priority::Low,
            )
            .with_tags(["sso", "saml"]),
        )
        .with_child(
            ContentItem::new(
                "api-access",
                "API access",
                ItemKind::Info,
                "settings",
                Priority::Medium,
            )
            .with_tags(["api", "webhooks"]),
        ),
        ContentItem::new(
            "billing-details",
            "Billing",
            ItemKind::Info,
            "billing",
            Priority::Low,
        )
        .with_child(
            ContentItem::new(
                "payment-methods",
                "Payment methods",
                ItemKind::Action,
                "billing",
                Priority::Medium,
            )
            .with_tags(["cards", "payment"])
            .with_action("Manage", "route:/billing/payment-methods"),
        )
        .with_child(
            ContentItem::new(
                "invoices",
                "Invoices",
                ItemKind::Info,
                "billing",
                Priority::Low,
            )
            .with_tags(["analytics", "export"]),
        ),
    ]
}
