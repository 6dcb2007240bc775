//! Configuration for panelkit.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (PANELKIT_CATALOGS)
//! 2. Config file (.panelkit/config.yaml)
//! 3. Defaults (built-in catalogs, section "dashboard")
//!
//! Config file discovery:
//! - Searches current directory and parents for .panelkit/config.yaml
//! - Paths in config file are relative to the project root (the parent of .panelkit/)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::core::ContextRules;
use crate::domain::Section;
use crate::library::PanelKind;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub panels: BTreeMap<PanelKind, PanelConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Directory holding <panel>.yaml / <panel>.json catalogs
    pub catalogs: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Section used when none is given
    pub section: Option<String>,
}

/// Per-panel overrides; unset fields keep the built-in value
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PanelConfig {
    pub empty_state: Option<String>,
    pub show_all: Option<Vec<Section>>,
    pub section_categories: Option<BTreeMap<Section, Vec<String>>>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Catalog directory, if configured
    pub catalog_dir: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Section used when none is given
    pub default_section: Section,
    /// Per-panel overrides
    pub panels: BTreeMap<PanelKind, PanelConfig>,
}

impl ResolvedConfig {
    /// Built-in rules for a panel with config overrides applied
    pub fn rules_for(&self, kind: PanelKind) -> ContextRules {
        let mut rules = kind.default_rules();

        if let Some(overrides) = self.panels.get(&kind) {
            if let Some(show_all) = &overrides.show_all {
                rules.show_all = show_all.clone();
            }
            if let Some(categories) = &overrides.section_categories {
                rules.section_categories = categories.clone();
            }
        }

        rules
    }

    /// Empty-state message for a panel
    pub fn empty_state_for(&self, kind: PanelKind) -> String {
        self.panels
            .get(&kind)
            .and_then(|p| p.empty_state.clone())
            .unwrap_or_else(|| kind.default_empty_state().to_string())
    }

    /// Catalog file for a panel in the catalog directory, if one exists
    pub fn catalog_file_for(&self, kind: PanelKind) -> Option<PathBuf> {
        let dir = self.catalog_dir.as_ref()?;

        let found = ["yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", kind.name(), ext)))
            .find(|p| p.exists());

        if found.is_none() {
            warn!(
                panel = %kind,
                dir = %dir.display(),
                "No catalog file in catalog directory, using built-in catalog"
            );
        }

        found
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".panelkit").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Combine an optional config file with environment overrides
fn resolve(
    config_file: Option<PathBuf>,
    env_catalogs: Option<String>,
) -> Result<ResolvedConfig> {
    let Some(config_path) = config_file else {
        // No config file - use env vars or defaults
        return Ok(ResolvedConfig {
            catalog_dir: env_catalogs.map(PathBuf::from),
            config_file: None,
            default_section: Section::dashboard(),
            panels: BTreeMap::new(),
        });
    };

    let config = load_config_file(&config_path)?;

    // Base directory is the parent of .panelkit/ (i.e., grandparent of config.yaml)
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let catalog_dir = if let Some(env_catalogs) = env_catalogs {
        Some(PathBuf::from(env_catalogs))
    } else {
        config
            .paths
            .catalogs
            .as_deref()
            .map(|dir| resolve_path(&base_dir, dir))
    };

    let default_section = match config.defaults.section.as_deref() {
        Some(raw) => Section::parse(raw)
            .with_context(|| format!("Invalid default section in {}", config_path.display()))?,
        None => Section::dashboard(),
    };

    Ok(ResolvedConfig {
        catalog_dir,
        config_file: Some(config_path),
        default_section,
        panels: config.panels,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(
        find_config_file(),
        std::env::var("PANELKIT_CATALOGS").ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let dir = temp.path().join(".panelkit");
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None).unwrap();

        assert!(config.catalog_dir.is_none());
        assert!(config.config_file.is_none());
        assert_eq!(config.default_section, Section::dashboard());
    }

    #[test]
    fn test_env_overrides_without_file() {
        let config = resolve(None, Some("/srv/catalogs".to_string())).unwrap();

        assert_eq!(config.catalog_dir, Some(PathBuf::from("/srv/catalogs")));
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
paths:
  catalogs: ./catalogs
defaults:
  section: Compliance
panels:
  help:
    empty_state: "Nothing here"
    show_all: [dashboard, overview]
  recommendations:
    section_categories:
      verification: [kyc]
"#,
        );

        let parsed = load_config_file(&config_path).unwrap();
        assert_eq!(parsed.version, "1.0");
        assert_eq!(parsed.paths.catalogs, Some("./catalogs".to_string()));
        assert_eq!(parsed.panels.len(), 2);

        let config = resolve(Some(config_path.clone()), None).unwrap();
        assert_eq!(config.config_file, Some(config_path));
        assert_eq!(config.default_section.as_str(), "compliance");
        assert!(config.catalog_dir.unwrap().ends_with("catalogs"));
    }

    #[test]
    fn test_stale_home_key_is_ignored() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
paths:
  home: ./state
"#,
        );

        let config = resolve(Some(config_path), None).unwrap();
        assert!(config.catalog_dir.is_none());
        assert!(!temp.path().join("state").exists());
    }

    #[test]
    fn test_invalid_default_section() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
defaults:
  section: "not a section"
"#,
        );

        assert!(resolve(Some(config_path), None).is_err());
    }

    #[test]
    fn test_panel_overrides_merge_field_by_field() {
        let overview = Section::parse("overview").unwrap();
        let config = ResolvedConfig {
            catalog_dir: None,
            config_file: None,
            default_section: Section::dashboard(),
            panels: [(
                PanelKind::Help,
                PanelConfig {
                    empty_state: Some("Nothing here".to_string()),
                    show_all: Some(vec![Section::dashboard(), overview.clone()]),
                    section_categories: None,
                },
            )]
            .into_iter()
            .collect(),
        };

        let rules = config.rules_for(PanelKind::Help);
        assert!(rules.shows_all(&overview));
        // Built-in whitelist survives when not overridden
        assert_eq!(rules.section_categories, PanelKind::Help.default_rules().section_categories);

        assert_eq!(config.empty_state_for(PanelKind::Help), "Nothing here");
        assert_eq!(
            config.empty_state_for(PanelKind::Disclosure),
            PanelKind::Disclosure.default_empty_state()
        );
        assert_eq!(config.rules_for(PanelKind::Disclosure), PanelKind::Disclosure.default_rules());
    }

    #[test]
    fn test_catalog_file_lookup() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("help.json"), "{}").unwrap();

        let config = ResolvedConfig {
            catalog_dir: Some(temp.path().to_path_buf()),
            config_file: None,
            default_section: Section::dashboard(),
            panels: BTreeMap::new(),
        };

        assert_eq!(
            config.catalog_file_for(PanelKind::Help),
            Some(temp.path().join("help.json"))
        );
        assert!(config.catalog_file_for(PanelKind::Recommendations).is_none());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
