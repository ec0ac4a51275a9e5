mod blocks;
mod commands;
mod config;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use commands::{check, check_blocks, schema, widgets, CheckArgs, CheckBlocksArgs, SchemaArgs};
use std::path::PathBuf;

/// Blockgate CLI - required-field checks for editor widgets
#[derive(Parser, Debug)]
#[command(name = "blockgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding blockgate.config.json (defaults to current directory)
    #[arg(long, global = true)]
    cwd: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered widget types
    Widgets,

    /// Show the fields of a widget type
    Schema(SchemaArgs),

    /// Validate one widget's attributes
    Check(CheckArgs),

    /// Validate every widget in a parsed-blocks document
    CheckBlocks(CheckBlocksArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.cwd.map(Ok).unwrap_or_else(std::env::current_dir) {
        Ok(cwd) => match cli.command {
            Command::Widgets => widgets(cli.format, &cwd),
            Command::Schema(args) => schema(args, cli.format, &cwd),
            Command::Check(args) => check(args, cli.format, &cwd),
            Command::CheckBlocks(args) => check_blocks(args, cli.format, &cwd),
        },
        Err(err) => Err(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!();
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            eprintln!();
            std::process::exit(1);
        }
    }
}
