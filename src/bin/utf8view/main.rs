//! utf8view CLI tool for inspecting and validating UTF-8 text.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use utf8view::text::{ColorChoice, ReportConfig};

mod input;
mod inspect;
mod validate;

#[derive(Debug, Parser)]
#[command(name = "utf8view")]
#[command(about = "UTF-8 text validation and inspection", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with report settings (snippet_width, tab_width, color)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate files for UTF-8 compliance
    Validate(validate::ValidateArgs),
    /// Print byte and codepoint lengths of each input
    Stat(inspect::StatArgs),
    /// List the codepoints of an input with their byte offsets
    Chars(inspect::CharsArgs),
}

/// Color overrides shared by commands that print diagnostics.
#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color", conflicts_with = "color")]
    pub no_color: bool,
}

impl ColorArgs {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: ReportConfig) -> ReportConfig {
        if self.no_color {
            config.with_color(ColorChoice::Never)
        } else if self.color {
            config.with_color(ColorChoice::Always)
        } else {
            config
        }
    }
}

/// Load report settings, falling back to defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config: ReportConfig = serde_json::from_slice(&bytes)
                .with_context(|| format!("invalid config {}", path.display()))?;
            // Deserializing bypasses the width floor of the builder
            let width = config.snippet_width;
            Ok(config.with_snippet_width(width))
        }
        None => Ok(ReportConfig::default()),
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Validate(args) => validate::run(args, config),
        Command::Stat(args) => inspect::run_stat(args),
        Command::Chars(args) => inspect::run_chars(args, config),
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            validate::exit_codes::IO_ERROR
        }
    };

    std::process::exit(code);
}
