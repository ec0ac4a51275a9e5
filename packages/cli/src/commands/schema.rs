use super::require_schema;
use crate::config::Config;
use crate::OutputFormat;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Widget type, e.g. `experience`
    pub widget: String,
}

pub fn schema(args: SchemaArgs, format: OutputFormat, cwd: &Path) -> Result<bool> {
    let registry = Config::load(cwd)?.registry()?;
    let schema = require_schema(&registry, &args.widget)?;
    let patterns = schema.patterns();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(true);
    }

    println!("{}", schema.name.bold());
    let width = patterns.iter().map(|p| p.pattern.len()).max().unwrap_or(0);
    for pattern in &patterns {
        let required = if pattern.required {
            "required".yellow()
        } else {
            "optional".dimmed()
        };
        println!(
            "   {:width$}  {:5}  {}",
            pattern.pattern,
            pattern.kind,
            required,
            width = width
        );
    }
    Ok(true)
}
