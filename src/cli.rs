//! CLI definitions for wego
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::config::ColorMode;

/// Build clap styles for consistent CLI appearance.
///
/// - Yellow: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Yellow.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "wego")]
#[command(about = "[ wego ] - weather forecasts as colored tables in your terminal")]
#[command(
    long_about = "wego renders a weather forecast as an ANSI-colored terminal report:
the current conditions followed by one table per forecast day, split into
morning, noon, evening and night.

wego does not fetch weather data itself. It reads a forecast document in
JSON (see the README for the format) from a file or from stdin.

QUICK START:
    wego report forecast.json            Render a forecast
    wego report - < forecast.json        Read the forecast from stdin
    wego report forecast.json --imperial Use Fahrenheit, mph, miles, inches
    wego config init                     Write the default config file"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a forecast report
    #[command(long_about = "Render a forecast report from a JSON forecast document.

The current conditions are printed first, followed by one boxed table per
forecast day in the order the document lists them. Defaults for the number
of days, units and color come from the config file.

EXAMPLES:
    wego report forecast.json              Current conditions + configured days
    wego report forecast.json --days 1     Only the first forecast day
    wego report forecast.json --days 0     Only the current conditions
    wego report forecast.json --color never > report.txt")]
    Report {
        /// Forecast document, or - for stdin
        #[arg(help = "Forecast JSON file, or - to read stdin")]
        forecast: PathBuf,
        /// Number of forecast days to show
        #[arg(long, short, help = "Number of forecast days to show")]
        days: Option<usize>,
        /// Use imperial units
        #[arg(long, conflicts_with = "metric", help = "Use imperial units")]
        imperial: bool,
        /// Use metric units
        #[arg(long, help = "Use metric units")]
        metric: bool,
        /// When to use colors
        #[arg(long, value_enum, help = "When to use colors")]
        color: Option<ColorMode>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script and print it to stdout.

EXAMPLES:
    wego completions bash > ~/.local/share/bash-completion/completions/wego
    wego completions zsh > ~/.zfunc/_wego")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration if no config file exists
    Init,
}

/// Resolve the `--imperial` / `--metric` pair into an override, if any.
pub fn units_override(imperial: bool, metric: bool) -> Option<bool> {
    match (imperial, metric) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
