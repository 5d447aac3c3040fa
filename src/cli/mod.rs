//! Command-line interface for swatch-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Find the catalog entries for a color, or the nearest ones
//! - **format**: Render a color through the output templates
//! - **catalog**: List, show, or export the color catalog
//!
//! ## Usage
//!
//! ```text
//! # Identify a color
//! swatch-solver identify '#2196f3'
//!
//! # Five nearest suggestions, as JSON
//! swatch-solver identify 'rgb(30, 140, 240)' -n 5 --format json
//!
//! # Copy-ready text using the default template
//! swatch-solver format '#ff8a80'
//!
//! # Every template, in order
//! swatch-solver format '#ff8a80' --all
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::catalog::index::CatalogIndex;
use crate::catalog::store::ColorCatalog;

pub mod catalog;
pub mod format;
pub mod identify;

#[derive(Parser)]
#[command(name = "swatch-solver")]
#[command(version)]
#[command(about = "Look up, match, and format colors against a named palette")]
#[command(
    long_about = "swatch-solver resolves a color (hex, rgb(), rgba(), or a CSS name) against a catalog of named colors.\n\nIt provides:\n- Exact matches when the hex is in the catalog\n- The nearest catalog colors otherwise\n- Copy-ready text rendered through configurable templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find catalog colors matching a color
    Identify(identify::IdentifyArgs),

    /// Render a color through output templates
    Format(format::FormatArgs),

    /// Inspect the color catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the custom catalog at `path`, or the embedded one
pub(crate) fn load_catalog(path: Option<&Path>) -> anyhow::Result<ColorCatalog> {
    let catalog = match path {
        Some(path) => ColorCatalog::load_from_file(path)?,
        None => ColorCatalog::load_embedded()?,
    };
    debug!(hues = catalog.len(), custom = path.is_some(), "Loaded catalog");
    Ok(catalog)
}

/// Load a catalog and build its index
pub(crate) fn load_index(path: Option<&Path>) -> anyhow::Result<CatalogIndex> {
    let catalog = load_catalog(path)?;
    Ok(CatalogIndex::build(&catalog))
}
