use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_index, OutputFormat};
use crate::format::config::TemplateSet;
use crate::format::template::{FormatData, FormatTemplate};
use crate::matching::engine::MatchingEngine;
use crate::parsing::color::parse_color;

#[derive(Args)]
pub struct FormatArgs {
    /// Color to format: hex, rgb(), rgba(), or a CSS color name
    #[arg(required = true)]
    pub color: String,

    /// Index of the template to use (0 is the default template)
    #[arg(short, long, default_value = "0", conflicts_with_all = ["all", "pattern"])]
    pub template: usize,

    /// Render every template, in order
    #[arg(long, conflicts_with = "pattern")]
    pub all: bool,

    /// Ad-hoc template pattern using $HUE, $VALUE, and $ALPHA
    #[arg(long)]
    pub pattern: Option<String>,

    /// Transform spec for --pattern (x, X, Xx, optionally prefixed by a replacer)
    #[arg(long, requires = "pattern")]
    pub transform: Option<String>,

    /// Format the color itself instead of its closest catalog entry
    #[arg(long)]
    pub raw: bool,

    /// Path to a JSON template list
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute format subcommand
///
/// # Errors
///
/// Returns an error if the color cannot be parsed, a file cannot be loaded, or
/// the template index is out of range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FormatArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let query = parse_color(&args.color)?;

    let data = if args.raw {
        FormatData::from_query(&query)
    } else {
        let index = load_index(args.catalog.as_deref())?;
        MatchingEngine::new(&index).format_data(&query)
    };

    if verbose {
        eprintln!(
            "Formatting {} as hue '{}', group '{}', value '{}'",
            query.hex(),
            data.hue_name,
            data.group_name.as_deref().unwrap_or(""),
            data.value_name
        );
    }

    let templates = select_templates(&args)?;
    let rendered: Vec<(&FormatTemplate, String)> = templates
        .iter()
        .map(|t| (t, t.render(&data)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (_, output) in &rendered {
                println!("{output}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rendered
                .iter()
                .map(|(t, output)| {
                    serde_json::json!({
                        "pattern": t.pattern,
                        "transform": t.transform,
                        "output": output,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("index\tpattern\ttransform\toutput");
            for (i, (t, output)) in rendered.iter().enumerate() {
                println!(
                    "{i}\t{}\t{}\t{output}",
                    t.pattern,
                    t.transform.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

/// The templates to render, in output order
fn select_templates(args: &FormatArgs) -> anyhow::Result<Vec<FormatTemplate>> {
    if let Some(pattern) = &args.pattern {
        let mut template = FormatTemplate::new(pattern.clone());
        template.transform.clone_from(&args.transform);
        return Ok(vec![template]);
    }

    let set = match &args.templates {
        Some(path) => TemplateSet::load_from_file(path)
            .with_context(|| format!("loading templates from {}", path.display()))?,
        None => TemplateSet::default(),
    };

    if args.all {
        return Ok(set.iter().cloned().collect());
    }

    let template = set.get(args.template).with_context(|| {
        format!(
            "template index {} out of range ({} templates)",
            args.template,
            set.len()
        )
    })?;
    Ok(vec![template.clone()])
}
