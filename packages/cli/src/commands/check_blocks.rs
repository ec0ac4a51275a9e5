use super::check::WidgetOutcome;
use crate::blocks::{flatten, ParsedBlock};
use crate::config::Config;
use crate::OutputFormat;
use anyhow::{Context, Result};
use blockgate_gate::PublishingLocks;
use blockgate_widget::WidgetInstance;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Args, Debug)]
pub struct CheckBlocksArgs {
    /// JSON array of parsed blocks (`blockName`, `attrs`, `innerBlocks`)
    pub file: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentOutcome<'a> {
    blocks: Vec<WidgetOutcome<'a>>,
    skipped: usize,
    held_locks: Vec<String>,
}

pub fn check_blocks(args: CheckBlocksArgs, format: OutputFormat, cwd: &Path) -> Result<bool> {
    let config = Config::load(cwd)?;
    let registry = config.registry()?;
    let options = config.widget_options();

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;
    let blocks: Vec<ParsedBlock> = serde_json::from_str(&source)
        .with_context(|| format!("Invalid blocks document {}", args.file.display()))?;

    // All instances of one document share the publishing lock set
    let locks = Arc::new(PublishingLocks::new());
    let mut instances = Vec::new();
    let mut skipped = 0;

    for located in flatten(&blocks) {
        let Some(schema) = registry.schema_for(located.widget_type) else {
            debug!(position = %located.position, block = located.widget_type, "block skipped");
            skipped += 1;
            continue;
        };
        instances.push(WidgetInstance::load(
            located.position,
            schema,
            located.block.attrs.clone(),
            locks.clone(),
            &options,
        ));
    }

    let outcome = DocumentOutcome {
        blocks: instances.iter().map(WidgetOutcome::of).collect(),
        skipped,
        held_locks: locks.held(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_document(&outcome, &args.file),
    }

    let valid = !locks.is_locked();
    for instance in instances {
        instance.teardown();
    }
    Ok(valid)
}

fn print_document(outcome: &DocumentOutcome<'_>, file: &Path) {
    println!("🔍 {} {}", "Checking".green().bold(), file.display());
    println!();

    for block in &outcome.blocks {
        let position = format!("#{}", block.instance);
        block.print(&format!("{} {}", block.widget.bold(), position.dimmed()));
    }

    let invalid = outcome.blocks.iter().filter(|b| !b.report.is_valid()).count();
    println!();
    println!("   Widgets checked: {}", outcome.blocks.len());
    if outcome.skipped > 0 {
        println!("   Other blocks skipped: {}", outcome.skipped);
    }

    if invalid == 0 {
        println!("   {} Ready to publish", "✓".green());
    } else {
        println!("   {} {}", "Invalid widgets:".red(), invalid);
        println!("   🔒 {} {}", "Publishing locked by".yellow(), outcome.held_locks.join(", "));
    }
}
