use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::index::CatalogIndex;
use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all hues in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show every color of a hue
    Show {
        /// Hue name (e.g., "light-blue")
        #[arg(required = true)]
        hue: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog as JSON
    Export {
        /// Output file path; prints to stdout if not specified
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the hue does not exist, or
/// the export cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { hue, catalog } => run_show(&hue, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} hues", catalog.len());
    }

    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .hue_names()
                .map(str::len)
                .max()
                .unwrap_or(3)
                .max(3);

            println!("Color Catalog ({} hues)\n", catalog.len());
            println!(
                "{:<name_w$} {:>6} {:<8} {:<8}",
                "Hue",
                "Colors",
                "Light",
                "Dark",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 25));

            for hue in catalog.hues() {
                let selector = hue.selector.clone().unwrap_or_default();
                println!(
                    "{:<name_w$} {:>6} {:<8} {:<8}",
                    hue.name,
                    hue.color_count(),
                    selector.light.as_deref().unwrap_or("-"),
                    selector.dark.as_deref().unwrap_or("-"),
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .hues()
                .iter()
                .map(|hue| {
                    serde_json::json!({
                        "name": hue.name,
                        "colors": hue.color_count(),
                        "selector": hue.selector,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tcolors\tlight\tdark");
            for hue in catalog.hues() {
                let selector = hue.selector.clone().unwrap_or_default();
                println!(
                    "{}\t{}\t{}\t{}",
                    hue.name,
                    hue.color_count(),
                    selector.light.as_deref().unwrap_or(""),
                    selector.dark.as_deref().unwrap_or(""),
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    hue_name: &str,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    if catalog.get(hue_name).is_none() {
        anyhow::bail!("Hue not found: {hue_name}");
    }

    let index = CatalogIndex::build(&catalog);
    let records: Vec<_> = index.records_for_hue(hue_name).collect();

    match format {
        OutputFormat::Text => {
            println!("{} ({} colors)\n", hue_name, records.len());
            for record in &records {
                println!("  {:<14} {}", record.qualified_value_name(), record.hex);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Tsv => {
            println!("hue\tgroup\tvalue\thex");
            for record in &records {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.hue_name,
                    record.group_name.as_deref().unwrap_or(""),
                    record.value_name,
                    record.hex
                );
            }
        }
    }

    Ok(())
}

fn run_export(output: Option<PathBuf>, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    let json = catalog.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!("Exported {} hues to {}", catalog.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
