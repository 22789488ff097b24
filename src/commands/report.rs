//! Report command handler

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use tracing::info;

use wego::config::ColorMode;
use wego::forecast::load_forecast;
use wego::render::{write_report, RenderContext};
use wego::Config;

/// Command-line arguments of `wego report`, overrides already resolved.
pub struct ReportArgs {
    pub forecast: PathBuf,
    pub days: Option<usize>,
    pub imperial: Option<bool>,
    pub color: Option<ColorMode>,
}

/// Render the forecast document to stdout.
///
/// Missing current conditions (or a missing day list when days were
/// requested) abort before anything is printed.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: ReportArgs) -> Result<()> {
    let config = Config::load()?.with_overrides(args.days, args.imperial, args.color);

    let input = load_forecast(&args.forecast)?.into_report_input(config.forecast.days)?;
    info!(
        days = input.days.len(),
        imperial = config.display.imperial,
        "Rendering report"
    );

    let stdout = io::stdout();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let color = config
        .display
        .color
        .should_color(stdout.is_terminal(), no_color);
    let ctx = RenderContext::new(config.display_units()).with_color(color);

    let mut out = stdout.lock();
    if let Some(location) = &input.location {
        writeln!(out, "Weather for {}: {}\n", location.kind, location.query)
            .context("Failed to write report")?;
    }
    write_report(&mut out, &input.current, &input.days, &ctx).context("Failed to write report")?;
    Ok(())
}
