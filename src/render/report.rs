//! Full report: current conditions, then one table per forecast day

use std::io::{self, Write};

use tracing::debug;

use super::ansi::strip;
use super::condition::{format_condition, ConditionMode};
use super::table::build_day_table;
use super::RenderContext;
use crate::forecast::{ForecastDay, WeatherSample};

/// Render the report as lines, days in the order given.
pub fn render_report(
    current: &WeatherSample,
    days: &[ForecastDay],
    ctx: &RenderContext,
) -> Vec<String> {
    let mut lines: Vec<String> = format_condition(current, ConditionMode::Current, ctx).into();

    for day in days {
        debug!(date = %day.date, samples = day.hourly.len(), "Rendering day table");
        lines.extend(build_day_table(day, ctx));
    }

    if !ctx.color {
        lines = lines.iter().map(|line| strip(line)).collect();
    }
    lines
}

/// Render the report and write it to `out`, one line at a time.
pub fn write_report<W: Write>(
    out: &mut W,
    current: &WeatherSample,
    days: &[ForecastDay],
    ctx: &RenderContext,
) -> io::Result<()> {
    for line in render_report(current, days, ctx) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
