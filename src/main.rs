// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Docent Catalog: museum artwork reference browser
//!
//! Command-line front end over the catalog export and the classifier.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use docent_catalog::catalog::cores::{self, Core};
use docent_catalog::config::BrowseConfig;
use docent_catalog::report::{self, CategoryBreakdown};
use docent_catalog::{
    AppConfig, ArtworkFilter, ArtworkRecord, Catalog, CatalogError, Classifier, MediumCategory,
    Result, SortOrder, SubjectCategory,
};

/// Docent CLI - museum catalog browser and artwork classifier
#[derive(Parser, Debug)]
#[command(name = "docent")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version)]
#[command(about = "Browse and classify the docent artwork catalog", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a single title/medium pair
    Classify {
        /// Artwork title
        #[arg(short, long)]
        title: Option<String>,

        /// Medium description (e.g. "Oil on canvas")
        #[arg(short, long)]
        medium: Option<String>,
    },

    /// List catalog artworks matching the given filters
    Browse {
        /// Catalog export (defaults to the configured path)
        catalog: Option<PathBuf>,

        /// Search title, artist, accession number and description
        #[arg(short, long)]
        search: Option<String>,

        /// Exact collection name
        #[arg(long)]
        collection: Option<String>,

        /// Restrict to a docent core (e.g. american)
        #[arg(long)]
        core: Option<String>,

        /// Medium category (oil, watercolor, sculpture, pastel, drawing, print, other)
        #[arg(short, long)]
        medium: Option<MediumCategory>,

        /// Subject category (portrait, landscape, cityscape, seascape, stilllife,
        /// genre, mythological, sculpture, contemporary, other)
        #[arg(long)]
        subject: Option<SubjectCategory>,

        /// Gallery location substring
        #[arg(short, long)]
        location: Option<String>,

        /// Show artworks that are on display, whatever the config says
        #[arg(long, conflicts_with = "hide_on_display")]
        on_display: bool,

        /// Hide artworks that are on display
        #[arg(long)]
        hide_on_display: bool,

        /// Show artworks that are not on display (hidden by default with --core)
        #[arg(long, conflicts_with = "hide_not_on_display")]
        not_on_display: bool,

        /// Hide artworks that are not on display
        #[arg(long)]
        hide_not_on_display: bool,

        /// Sort order (title-asc, title-desc, date)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Maximum results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List artworks whose subject falls through to "other"
    Uncategorized {
        /// Catalog export (defaults to the configured path)
        catalog: Option<PathBuf>,
    },

    /// Show per-category counts
    Stats {
        /// Catalog export (defaults to the configured path)
        catalog: Option<PathBuf>,
    },

    /// List docent cores
    Cores {
        /// Only cores with collections assigned
        #[arg(long)]
        active: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration file
    Validate,
}

/// Browse options after merging CLI flags over config defaults
struct BrowseArgs {
    filter: ArtworkFilter,
    limit: Option<usize>,
}

/// Display-status switches from the command line
#[derive(Debug, Default, Clone, Copy)]
struct DisplayFlags {
    on_display: bool,
    hide_on_display: bool,
    not_on_display: bool,
    hide_not_on_display: bool,
}

impl DisplayFlags {
    /// Resolve `(show_on_display, show_not_on_display)`. Explicit flags win;
    /// a core listing shows only works on display, like the core pages.
    fn resolve(&self, config: &BrowseConfig, core_selected: bool) -> (bool, bool) {
        let show_on = if self.on_display {
            true
        } else if self.hide_on_display {
            false
        } else {
            config.show_on_display
        };
        let show_not = if self.not_on_display {
            true
        } else if self.hide_not_on_display || core_selected {
            false
        } else {
            config.show_not_on_display
        };
        (show_on, show_not)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(&cli.config)?;
    let classifier = config.classifier();
    if classifier.overrides().extra_len() > 0 {
        info!("Loaded {} extra title overrides", classifier.overrides().extra_len());
    }

    match cli.command {
        Commands::Classify { title, medium } => {
            run_classify(&classifier, title.as_deref(), medium.as_deref(), &cli.format)
        }
        Commands::Browse {
            catalog,
            search,
            collection,
            core,
            medium,
            subject,
            location,
            on_display,
            hide_on_display,
            not_on_display,
            hide_not_on_display,
            sort,
            limit,
        } => {
            let core = match core {
                Some(id) => Some(
                    cores::core_by_id(&id).ok_or_else(|| CatalogError::UnknownCore(id.clone()))?,
                ),
                None => None,
            };
            let flags = DisplayFlags {
                on_display,
                hide_on_display,
                not_on_display,
                hide_not_on_display,
            };
            let (show_on_display, show_not_on_display) =
                flags.resolve(&config.browse, core.is_some());
            let args = BrowseArgs {
                filter: ArtworkFilter {
                    search,
                    collection,
                    core,
                    medium,
                    subject,
                    gallery_location: location,
                    show_on_display,
                    show_not_on_display,
                    sort: sort.unwrap_or(config.browse.sort),
                },
                limit,
            };
            let catalog = load_catalog(&config, catalog.as_deref())?;
            run_browse(&classifier, &catalog, &args, &cli.format)
        }
        Commands::Uncategorized { catalog } => {
            let catalog = load_catalog(&config, catalog.as_deref())?;
            run_uncategorized(&classifier, &catalog, &cli.format)
        }
        Commands::Stats { catalog } => {
            let catalog = load_catalog(&config, catalog.as_deref())?;
            run_stats(&classifier, &catalog, &cli.format)
        }
        Commands::Cores { active } => run_cores(active, &cli.format),
        Commands::Config { action } => run_config_command(config, action, &cli.config),
    }
}

/// Load the catalog from an explicit path or the configured default
fn load_catalog(config: &AppConfig, path: Option<&Path>) -> Result<Catalog> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    let catalog = Catalog::load(&path)?;
    info!("Catalog: {} artworks from {:?}", catalog.len(), path);
    Ok(catalog)
}

/// JSON view of a record with both labels attached
fn record_json(classifier: &Classifier, record: &ArtworkRecord) -> serde_json::Value {
    let labels = record.classify_with(classifier);
    serde_json::json!({
        "id": record.id,
        "accession_number": record.accession_number,
        "title": record.title,
        "artist": record.artist,
        "collection": record.collection,
        "date": record.date,
        "on_display": record.is_on_display(),
        "gallery_location": record.gallery_location,
        "medium": labels.medium,
        "subject": labels.subject,
    })
}

fn print_records(classifier: &Classifier, records: &[&ArtworkRecord], format: &str) -> Result<()> {
    match format {
        "json" => {
            let output: Vec<serde_json::Value> =
                records.iter().map(|r| record_json(classifier, r)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "jsonl" => {
            for record in records {
                println!("{}", serde_json::to_string(&record_json(classifier, record))?);
            }
        }
        _ => {
            for record in records {
                let labels = record.classify_with(classifier);
                println!(
                    "{:<10} {} [{} / {}]",
                    record.id, record.title, labels.medium, labels.subject
                );
                if let Some(ref artist) = record.artist {
                    println!("{:<10} {}", "", artist);
                }
            }
        }
    }
    Ok(())
}

/// Classify one title/medium pair
fn run_classify(
    classifier: &Classifier,
    title: Option<&str>,
    medium: Option<&str>,
    format: &str,
) -> Result<()> {
    let labels = classifier.classify(title, medium);
    debug!("Classified {:?} / {:?} as {:?}", title, medium, labels);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&labels)?),
        "jsonl" => println!("{}", serde_json::to_string(&labels)?),
        _ => {
            println!("Medium:  {} ({})", labels.medium, labels.medium.display_name());
            println!("Subject: {} ({})", labels.subject, labels.subject.display_name());
        }
    }
    Ok(())
}

/// Run a filtered browse over the catalog
fn run_browse(classifier: &Classifier, catalog: &Catalog, args: &BrowseArgs, format: &str) -> Result<()> {
    let mut matched = args.filter.apply(classifier, catalog.records());
    let total = matched.len();
    if let Some(limit) = args.limit {
        matched.truncate(limit);
    }

    print_records(classifier, &matched, format)?;

    if format == "text" {
        println!("\nShowing {} of {} matching artworks", matched.len(), total);
    }
    Ok(())
}

/// List artworks that need an override or a new rule
fn run_uncategorized(classifier: &Classifier, catalog: &Catalog, format: &str) -> Result<()> {
    let others = report::uncategorized(classifier, catalog.records());

    match format {
        "text" => {
            println!("Artworks in OTHER category ({}):", others.len());
            for record in &others {
                println!("  \"{}\"", docent_catalog::classify::normalize_title(&record.title));
            }
        }
        _ => print_records(classifier, &others, format)?,
    }
    Ok(())
}

/// Print per-category counts
fn run_stats(classifier: &Classifier, catalog: &Catalog, format: &str) -> Result<()> {
    let breakdown = CategoryBreakdown::from_records(classifier, catalog.records());

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        "jsonl" => println!("{}", serde_json::to_string(&breakdown)?),
        _ => {
            println!("Catalog Statistics:");
            println!("  Artworks: {}", breakdown.total);
            println!("\nBy medium:");
            for (category, count) in &breakdown.medium {
                println!("  {:<26} {}", category.display_name(), count);
            }
            println!("\nBy subject:");
            for (category, count) in &breakdown.subject {
                println!("  {:<26} {}", category.display_name(), count);
            }
        }
    }
    Ok(())
}

/// List docent cores
fn run_cores(active_only: bool, format: &str) -> Result<()> {
    let listed: Vec<&Core> = if active_only {
        cores::active_cores()
    } else {
        cores::all_cores().iter().collect()
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&listed)?),
        "jsonl" => {
            for core in &listed {
                println!("{}", serde_json::to_string(core)?);
            }
        }
        _ => {
            println!("Cores:");
            for core in &listed {
                let status = if core.is_active() { "" } else { "[NO COLLECTIONS]" };
                println!("  {} - {} {}", core.id, core.display_name, status);
                for collection in core.collections {
                    println!("      {}", collection);
                }
            }
        }
    }
    Ok(())
}

/// Run config commands
fn run_config_command(config: AppConfig, action: ConfigCommands, config_path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output, force } => {
            if output.exists() && !force {
                return Err(CatalogError::Config(format!(
                    "{} already exists. Use --force to overwrite",
                    output.display()
                )));
            }
            AppConfig::default().save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            let classifier = config.classifier();
            println!("Configuration at {:?} is valid", config_path);
            println!("  Catalog: {}", config.catalog.path);
            println!("  Default sort: {}", config.browse.sort);
            println!(
                "  Overrides: {} built-in, {} extra",
                classifier.overrides().len() - classifier.overrides().extra_len(),
                classifier.overrides().extra_len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_classify_command() {
        let cli = Cli::try_parse_from([
            "docent", "classify", "--title", "Boston Harbor", "--medium", "Oil on canvas",
        ])
        .unwrap();

        match cli.command {
            Commands::Classify { title, medium } => {
                assert_eq!(title.as_deref(), Some("Boston Harbor"));
                assert_eq!(medium.as_deref(), Some("Oil on canvas"));
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_cli_browse_categories() {
        let cli = Cli::try_parse_from([
            "docent", "browse", "artworks.json", "--medium", "oil", "--subject", "stilllife",
            "--sort", "date", "--hide-not-on-display",
        ])
        .unwrap();

        match cli.command {
            Commands::Browse { catalog, medium, subject, sort, hide_not_on_display, .. } => {
                assert_eq!(catalog, Some(PathBuf::from("artworks.json")));
                assert_eq!(medium, Some(MediumCategory::Oil));
                assert_eq!(subject, Some(SubjectCategory::StillLife));
                assert_eq!(sort, Some(SortOrder::Date));
                assert!(hide_not_on_display);
            }
            _ => panic!("Expected Browse command"),
        }
    }

    #[test]
    fn test_cli_browse_display_overrides() {
        let cli = Cli::try_parse_from(["docent", "browse", "--on-display", "--not-on-display"])
            .unwrap();
        match cli.command {
            Commands::Browse { on_display, not_on_display, .. } => {
                assert!(on_display);
                assert!(not_on_display);
            }
            _ => panic!("Expected Browse command"),
        }

        assert!(Cli::try_parse_from(["docent", "browse", "--on-display", "--hide-on-display"])
            .is_err());
        assert!(Cli::try_parse_from([
            "docent", "browse", "--not-on-display", "--hide-not-on-display",
        ])
        .is_err());
    }

    #[test]
    fn test_display_flags_resolve() {
        let defaults = BrowseConfig::default();
        assert_eq!(DisplayFlags::default().resolve(&defaults, false), (true, true));

        // a core listing starts from works on display
        assert_eq!(DisplayFlags::default().resolve(&defaults, true), (true, false));
        let all = DisplayFlags { not_on_display: true, ..Default::default() };
        assert_eq!(all.resolve(&defaults, true), (true, true));

        // command line beats a config that hides things
        let hiding = BrowseConfig {
            show_on_display: false,
            show_not_on_display: false,
            ..Default::default()
        };
        let both = DisplayFlags { on_display: true, not_on_display: true, ..Default::default() };
        assert_eq!(both.resolve(&hiding, false), (true, true));
        assert_eq!(DisplayFlags::default().resolve(&hiding, false), (false, false));

        let hide = DisplayFlags { hide_on_display: true, ..Default::default() };
        assert_eq!(hide.resolve(&defaults, false), (false, true));
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let result = Cli::try_parse_from(["docent", "browse", "--subject", "figures"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_format() {
        let cli = Cli::try_parse_from(["docent", "stats", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Commands::Stats { catalog: None }));
    }
}
