//! wego - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wego::cli::{units_override, Cli, Commands, ConfigCommands};

/// Environment variable holding a tracing filter, e.g. `WEGO_LOG=debug`
const LOG_ENV: &str = "WEGO_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Report {
            forecast,
            days,
            imperial,
            metric,
            color,
        } => commands::report::handle(commands::report::ReportArgs {
            forecast,
            days,
            imperial: units_override(imperial, metric),
            color,
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Log to stderr. `WEGO_LOG` wins over `-v`; the default only shows warnings.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
