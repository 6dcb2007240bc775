//! Command-line interface for panelkit.
//!
//! Provides commands for previewing panel selections, activating items,
//! inspecting catalogs and showing the resolved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, ResolvedConfig};
use crate::core::{Panel, PanelView, SelectedAction};
use crate::domain::{ContentItem, ItemId, Section, SelectionContext};
use crate::library::{CatalogSource, FileCatalogSource, PanelKind};

/// panelkit - Contextual content selection for dashboard panels
#[derive(Parser, Debug)]
#[command(name = "panelkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what a panel would display
    Select {
        /// Panel to select for
        #[arg(short, long, value_enum)]
        panel: PanelArg,

        /// Current dashboard section (defaults to the configured section)
        #[arg(short, long)]
        section: Option<String>,

        /// Search query
        #[arg(short, long, default_value = "")]
        query: String,

        /// Item ids dismissed in this session (comma-separated)
        #[arg(short, long)]
        dismiss: Option<String>,

        /// Disclosure groups expanded in this session (comma-separated)
        #[arg(short, long)]
        expand: Option<String>,

        /// Catalog file (YAML or JSON) instead of the configured one
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Activate a visible item and print its action
    Activate {
        /// Panel the item belongs to
        #[arg(short, long, value_enum)]
        panel: PanelArg,

        /// Item ID
        item_id: String,

        /// Current dashboard section
        #[arg(short, long)]
        section: Option<String>,

        /// Search query
        #[arg(short, long, default_value = "")]
        query: String,

        /// Catalog file (YAML or JSON) instead of the configured one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List a panel's catalog and check it for errors
    Catalog {
        /// Panel whose catalog to show
        #[arg(short, long, value_enum)]
        panel: PanelArg,

        /// Catalog file (YAML or JSON) instead of the configured one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show a panel's section rules
    Sections {
        /// Panel whose rules to show
        #[arg(short, long, value_enum)]
        panel: PanelArg,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Panel kind for CLI (maps to PanelKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PanelArg {
    /// Contextual help widget
    Help,

    /// Smart recommendations
    Recommendations,

    /// Progressive disclosure
    Disclosure,
}

impl From<PanelArg> for PanelKind {
    fn from(p: PanelArg) -> Self {
        match p {
            PanelArg::Help => PanelKind::Help,
            PanelArg::Recommendations => PanelKind::Recommendations,
            PanelArg::Disclosure => PanelKind::Disclosure,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Select {
                panel,
                section,
                query,
                dismiss,
                expand,
                catalog,
                json,
            } => {
                let args = SelectArgs {
                    section,
                    query,
                    dismiss: split_list(dismiss),
                    expand: split_list(expand),
                    json,
                };
                select(panel.into(), catalog, args).await
            }
            Commands::Activate {
                panel,
                item_id,
                section,
                query,
                catalog,
            } => activate(panel.into(), &item_id, section, query, catalog).await,
            Commands::Catalog { panel, catalog } => show_catalog(panel.into(), catalog).await,
            Commands::Sections { panel } => show_sections(panel.into()),
            Commands::Config => show_config(),
        }
    }
}

struct SelectArgs {
    section: Option<String>,
    query: String,
    dismiss: Vec<String>,
    expand: Vec<String>,
    json: bool,
}

/// Split a comma-separated option into trimmed, non-empty values
fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Pick the catalog source: explicit file, configured directory, or built-in
fn catalog_source(
    cfg: &ResolvedConfig,
    kind: PanelKind,
    explicit: Option<PathBuf>,
) -> Box<dyn CatalogSource> {
    if let Some(path) = explicit.or_else(|| cfg.catalog_file_for(kind)) {
        Box::new(FileCatalogSource::new(path))
    } else {
        Box::new(kind.builtin_source())
    }
}

/// Parse the requested section, falling back to the configured default
fn resolve_section(cfg: &ResolvedConfig, section: Option<String>) -> Result<Section> {
    match section {
        Some(raw) => Section::parse(&raw).with_context(|| format!("Invalid section: {}", raw)),
        None => Ok(cfg.default_section.clone()),
    }
}

async fn mount_panel(
    cfg: &ResolvedConfig,
    kind: PanelKind,
    catalog: Option<PathBuf>,
) -> Result<Panel> {
    let source = catalog_source(cfg, kind, catalog);
    let panel = Panel::mount(kind, source.as_ref(), cfg.rules_for(kind))
        .await?
        .with_empty_state(cfg.empty_state_for(kind));
    Ok(panel)
}

/// Print the selection for a panel
async fn select(kind: PanelKind, catalog: Option<PathBuf>, args: SelectArgs) -> Result<()> {
    let cfg = config::config()?;
    let mut panel = mount_panel(cfg, kind, catalog).await?;

    let section = resolve_section(cfg, args.section)?;
    panel.set_context(SelectionContext::new(section, args.query));

    for id in &args.dismiss {
        panel.dismiss(&ItemId::from(id.as_str()));
    }
    for id in &args.expand {
        panel.expand(&ItemId::from(id.as_str()));
    }

    let view = panel.view();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &PanelView) {
    if let Some(message) = &view.empty_state {
        println!("{}", message);
        return;
    }

    println!(
        "{:<24} {:<8} {:<9} {:<14} {:<40}",
        "ID", "PRIORITY", "KIND", "CATEGORY", "TITLE"
    );
    println!("{}", "-".repeat(98));

    for entry in &view.entries {
        let marker = match (entry.item.is_container(), entry.expanded) {
            (false, _) => "",
            (true, false) => "+ ",
            (true, true) => "- ",
        };
        print_item_row(&entry.item, &format!("{}{}", marker, entry.item.id));

        if entry.expanded {
            for child in &entry.item.children {
                print_item_row(child, &format!("  └ {}", child.id));
            }
        } else if entry.item.is_container() {
            println!("{:<24} ({} hidden)", "", entry.item.children.len());
        }
    }

    println!("\nShowing {} item(s)", view.entries.len());
}

fn print_item_row(item: &ContentItem, label: &str) {
    println!(
        "{:<24} {:<8} {:<9} {:<14} {:<40}",
        label,
        item.priority.to_string(),
        item.kind.to_string(),
        item.category,
        truncate(&item.title, 40)
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

/// Activate an item and print the host payload
async fn activate(
    kind: PanelKind,
    item_id: &str,
    section: Option<String>,
    query: String,
    catalog: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::config()?;
    let mut panel = mount_panel(cfg, kind, catalog).await?;
    panel.set_context(SelectionContext::new(resolve_section(cfg, section)?, query));

    let mut selected: Option<SelectedAction> = None;
    let mut handler = |action: SelectedAction| selected = Some(action);
    let id = ItemId::from(item_id);

    if !panel.activate(&id, &mut handler) {
        anyhow::bail!(
            "Item '{}' is not visible in the {} panel or has no action",
            item_id,
            kind
        );
    }

    if let Some(action) = selected {
        println!("{}", serde_json::to_string_pretty(&action)?);
    }

    Ok(())
}

/// List a catalog tree and report validation status
async fn show_catalog(kind: PanelKind, catalog: Option<PathBuf>) -> Result<()> {
    let cfg = config::config()?;
    let source = catalog_source(cfg, kind, catalog);
    let catalog = source.load().await?;

    println!("Source: {}", source.name());
    println!("Version: {}", catalog.version);
    println!();

    if catalog.is_empty() {
        println!("Catalog is empty.");
    }

    for item in &catalog.items {
        print_catalog_item(item, 0);
    }

    println!();
    match catalog.validate() {
        Ok(()) => println!("Catalog is valid ({} top-level items)", catalog.len()),
        Err(e) => anyhow::bail!("Catalog is invalid: {}", e),
    }

    Ok(())
}

fn print_catalog_item(item: &ContentItem, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}{} [{}/{}/{}] {}",
        indent, item.id, item.kind, item.priority, item.category, item.title
    );
    if !item.tags.is_empty() {
        println!("{}    tags: {}", indent, item.tags.join(", "));
    }
    if let Some(action) = &item.action {
        println!("{}    action: {} -> {}", indent, action.label, action.target);
    }
    for child in &item.children {
        print_catalog_item(child, depth + 1);
    }
}

/// Show section rules for a panel
fn show_sections(kind: PanelKind) -> Result<()> {
    let cfg = config::config()?;
    let rules = cfg.rules_for(kind);

    println!("Panel: {}", kind);
    println!();
    println!("Show-all sections:");
    for section in &rules.show_all {
        println!("  {}", section);
    }
    println!();
    println!("Section category whitelist:");
    if rules.section_categories.is_empty() {
        println!("  (none)");
    } else {
        for (section, categories) in &rules.section_categories {
            println!("  {}: {}", section, categories.join(", "));
        }
    }
    println!();
    println!("Any other section keeps items whose category or a tag equals it,");
    println!("plus every high-priority item.");

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("panelkit configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!(
        "  Catalogs: {}",
        cfg.catalog_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!();
    println!("Default section: {}", cfg.default_section);
    println!();
    println!("Panels:");
    for kind in PanelKind::ALL {
        let source = cfg
            .catalog_file_for(kind)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string());
        println!("  {:<16} catalog: {}", kind.name(), source);
        println!("  {:<16} empty state: {}", "", cfg.empty_state_for(kind));
    }

    Ok(())
}
