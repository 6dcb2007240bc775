//! Dashboard sections and the selection context.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The home section. Catalogs list it in their show-all set by default.
pub const DASHBOARD: &str = "dashboard";

/// A validated dashboard section name.
///
/// Section names are normalized to lowercase and may contain only ASCII
/// letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Section(String);

impl Section {
    /// Parse and normalize a section name
    pub fn parse(raw: &str) -> Result<Self, SectionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SectionError::Empty);
        }

        if let Some(ch) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(SectionError::InvalidChar {
                section: trimmed.to_string(),
                ch,
            });
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// The home section
    pub fn dashboard() -> Self {
        Self(DASHBOARD.to_string())
    }

    /// Whether `raw` is already a normalized section name.
    ///
    /// Usable in const context, so literal names can be checked at compile time.
    pub const fn is_canonical(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        if bytes.is_empty() {
            return false;
        }

        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_') {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Wrap a literal name checked with [`Section::is_canonical`]
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(Self::is_canonical(name), "non-canonical section: {name}");
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Section {
    type Error = SectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.0
    }
}

/// Section validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("Section name cannot be empty")]
    Empty,

    #[error("Section '{section}' contains invalid character '{ch}'")]
    InvalidChar { section: String, ch: char },
}

/// Runtime inputs that drive filtering: where the user is and what they typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionContext {
    /// Current dashboard section
    pub section: Section,

    /// Raw search query (may be empty)
    #[serde(default)]
    pub query: String,
}

impl SelectionContext {
    pub fn new(section: Section, query: impl Into<String>) -> Self {
        Self {
            section,
            query: query.into(),
        }
    }

    /// Context for a section with no search query
    pub fn for_section(section: Section) -> Self {
        Self::new(section, "")
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}
