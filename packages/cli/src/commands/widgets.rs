use crate::config::Config;
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn widgets(format: OutputFormat, cwd: &Path) -> Result<bool> {
    let config = Config::load(cwd)?;
    let registry = config.registry()?;

    if format == OutputFormat::Json {
        let types: Vec<&str> = registry.widget_types().collect();
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(true);
    }

    println!("📦 {} widget types", registry.len().to_string().bold());
    for widget in registry.widget_types() {
        let custom = config.widgets.iter().any(|w| w.name == widget);
        if custom {
            println!("   {} {}", widget, "(config)".dimmed());
        } else {
            println!("   {}", widget);
        }
    }
    Ok(true)
}
