use std::path::PathBuf;

use clap::Args;

use crate::catalog::index::DEFAULT_NEAREST;
use crate::cli::{load_index, OutputFormat};
use crate::matching::engine::{MatchKind, MatchOutcome, MatchingConfig, MatchingEngine};
use crate::parsing::color::parse_color;

#[derive(Args)]
pub struct IdentifyArgs {
    /// Color to look up: hex, rgb(), rgba(), or a CSS color name
    #[arg(required = true)]
    pub color: String,

    /// Number of nearest colors to suggest when there is no exact match
    #[arg(short = 'n', long, default_value_t = DEFAULT_NEAREST)]
    pub max_matches: usize,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if the color cannot be parsed or the catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let query = parse_color(&args.color)?;
    let index = load_index(args.catalog.as_deref())?;

    if verbose {
        eprintln!(
            "Parsed {} as {} (alpha {})",
            args.color,
            query.hex(),
            query.alpha_or_default()
        );
        eprintln!("Indexed {} catalog colors", index.len());
    }

    if index.is_empty() {
        eprintln!("Warning: Catalog is empty, no colors to match against.");
        return Ok(());
    }

    let config = MatchingConfig {
        suggestions: args.max_matches,
    };
    let engine = MatchingEngine::with_config(&index, config);
    let outcome = engine.resolve(&query);

    if outcome.is_empty() {
        eprintln!("No matching colors found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&outcome),
        OutputFormat::Json => print_json_results(&outcome)?,
        OutputFormat::Tsv => print_tsv_results(&outcome),
    }

    Ok(())
}

fn print_text_results(outcome: &MatchOutcome<'_>) {
    match outcome.kind {
        MatchKind::Exact => println!("Exact match for {}:", outcome.query),
        MatchKind::Nearest => println!("No exact match for {}; nearest colors:", outcome.query),
    }

    for (i, m) in outcome.matches.iter().enumerate() {
        match outcome.kind {
            MatchKind::Exact => println!("  #{} {}", i + 1, m.record),
            MatchKind::Nearest => {
                println!("  #{} {}  distance {:.1}", i + 1, m.record, m.distance);
            }
        }
    }
}

fn print_json_results(outcome: &MatchOutcome<'_>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn print_tsv_results(outcome: &MatchOutcome<'_>) {
    println!("rank\tkind\thue\tgroup\tvalue\thex\tdistance");
    let kind = match outcome.kind {
        MatchKind::Exact => "exact",
        MatchKind::Nearest => "nearest",
    };
    for (i, m) in outcome.matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
            i + 1,
            kind,
            m.record.hue_name,
            m.record.group_name.as_deref().unwrap_or(""),
            m.record.value_name,
            m.record.hex,
            m.distance,
        );
    }
}
