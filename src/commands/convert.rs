//! Convert handler: read an export, partition it by day, write the result.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use timeline_days::cli::Cli;
use timeline_days::{Config, DayIndex, TimelineDocument};

/// Run a full conversion as described by the command line.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let options = cli.partition_options(&config);

    let document = read_document(&cli.input)?;
    let index = DayIndex::build(cli.input.display().to_string(), &document, &options)
        .with_context(|| format!("Failed to partition {}", cli.input.display()))?;
    let json = index
        .to_json(cli.pretty(&config))
        .context("Failed to serialize output")?;

    if cli.stdout {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        return Ok(());
    }

    let output_path = cli.output_path(&config);
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    tracing::info!(
        days = index.day_count,
        segments = index.segment_count,
        "Wrote day index"
    );
    println!("Wrote day-by-day output to: {}", output_path.display());
    Ok(())
}

fn read_document(path: &Path) -> Result<TimelineDocument> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let document = TimelineDocument::from_json(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(segments = document.segments.len(), "Loaded export");
    Ok(document)
}
