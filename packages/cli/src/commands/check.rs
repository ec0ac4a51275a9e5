use super::require_schema;
use crate::config::Config;
use crate::OutputFormat;
use anyhow::{Context, Result};
use blockgate_common::Record;
use blockgate_gate::{GateState, PublishingLocks};
use blockgate_validator::ValidationReport;
use blockgate_widget::WidgetInstance;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Widget type, e.g. `intro`
    pub widget: String,

    /// JSON file holding the widget's attributes
    pub file: PathBuf,
}

/// Result line for one checked widget
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WidgetOutcome<'a> {
    pub instance: &'a str,
    pub widget: &'a str,
    #[serde(flatten)]
    pub report: &'a ValidationReport,
    pub gate: GateState,
}

impl<'a> WidgetOutcome<'a> {
    pub fn of(instance: &'a WidgetInstance) -> Self {
        Self {
            instance: instance.id(),
            widget: instance.widget_type(),
            report: instance.report(),
            gate: instance.gate_state(),
        }
    }

    pub fn print(&self, label: &str) {
        if self.report.is_valid() {
            println!("{} {}", "✓".green(), label);
            return;
        }

        println!("{} {}", "✗".red(), label);
        for error in self.report.errors() {
            println!("  {} {}", error.field.red().bold(), error.message);
        }
    }
}

pub fn check(args: CheckArgs, format: OutputFormat, cwd: &Path) -> Result<bool> {
    let config = Config::load(cwd)?;
    let registry = config.registry()?;
    let schema = require_schema(&registry, &args.widget)?;

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;
    let attributes: Record = serde_json::from_str(&source)
        .with_context(|| format!("Invalid attributes in {}", args.file.display()))?;

    let locks = Arc::new(PublishingLocks::new());
    let id = args
        .file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.widget.clone());
    let options = config.widget_options();
    let instance = WidgetInstance::load(id, schema, attributes, locks.clone(), &options);

    let outcome = WidgetOutcome::of(&instance);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => {
            outcome.print(&format!("{} {}", args.widget.bold(), args.file.display()));
            if locks.is_locked() {
                println!();
                println!("🔒 {} {}", "Publishing locked by".yellow(), instance.lock_name());
            }
        }
    }

    let valid = instance.is_valid();
    instance.teardown();
    Ok(valid)
}
