//! Lino to Markdown Converter
//!
//! Converts a Links Notation decrease-key report (as written by
//! `dijkstra-sorting dijkstra --lino report.lino`) to a Markdown table.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dijkstra_sorting::report::parse_lino_report;

#[derive(Debug, Parser)]
#[command(
    name = "lino2md",
    about = "Convert a Links Notation decrease-key report to Markdown",
    version
)]
struct Cli {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Optional output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let report = parse_lino_report(&content)
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    let markdown = report.to_markdown_table();

    match cli.output {
        Some(output) => {
            fs::write(&output, &markdown)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Markdown report written to: {}", output.display());
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
