//! Formatting of a single weather sample
//!
//! A sample becomes five lines, each an icon line followed by one field:
//! description, temperature, wind, visibility and rain. Every field is
//! fitted to [`FIELD_WIDTH`] visible characters, every icon line to
//! [`ICON_WIDTH`].

use std::cmp::Ordering;

use tracing::debug;

use super::ansi::{neutralize, pad_to, visible_width};
use super::color::{grade_temperature, grade_wind_speed};
use super::icons::{Icon, IconLines, ICON_HEIGHT, ICON_WIDTH};
use super::units::DisplayUnits;
use super::RenderContext;
use crate::forecast::WeatherSample;

/// Visible width of every data field.
pub const FIELD_WIDTH: usize = 15;

/// Visible width of one formatted block line: a space, the icon, a space
/// and the field.
pub const BLOCK_WIDTH: usize = 1 + ICON_WIDTH + 1 + FIELD_WIDTH;

pub type ConditionLines = [String; ICON_HEIGHT];

/// Where a sample is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionMode {
    /// The current-conditions block: description shown verbatim
    Current,
    /// A day-part column: description fitted to the column
    Forecast,
}

/// Format `sample` as five icon + field lines.
pub fn format_condition(
    sample: &WeatherSample,
    mode: ConditionMode,
    ctx: &RenderContext,
) -> ConditionLines {
    let icon = Icon::for_code(sample.weather_code);
    if icon == Icon::Unknown {
        debug!(code = sample.weather_code, "No icon for weather code");
    }

    let description = match mode {
        ConditionMode::Current => neutralize(&sample.weather_desc).into_owned(),
        ConditionMode::Forecast => fit_description(&sample.weather_desc, FIELD_WIDTH),
    };

    compose(
        icon.lines(),
        [
            description,
            format_temperature(sample, ctx.units),
            format_wind(sample, ctx.units),
            format_visibility(sample, ctx.units),
            format_rain(sample, ctx.units),
        ],
    )
}

/// Block shown for a day part that has no sample at all.
pub fn format_missing() -> ConditionLines {
    let dash = pad_to("-", FIELD_WIDTH);
    compose(
        Icon::Unknown.lines(),
        [
            fit_description("No data", FIELD_WIDTH),
            dash.clone(),
            dash.clone(),
            dash.clone(),
            dash,
        ],
    )
}

fn compose(icon: &IconLines, fields: [String; ICON_HEIGHT]) -> ConditionLines {
    let glyphs: IconLines = *icon;
    let mut fields = fields.into_iter();
    glyphs.map(|glyph| {
        let field = fields.next().unwrap_or_default();
        format!(" {} {}", pad_to(glyph, ICON_WIDTH), field)
    })
}

/// `low – high °C` when the felt temperature differs, else a single value.
///
/// Colors are graded on Celsius; only the printed number is converted.
pub fn format_temperature(sample: &WeatherSample, units: DisplayUnits) -> String {
    let paint = |celsius: i32| grade_temperature(celsius).paint(units.temperature(celsius));
    let nominal = sample.nominal_temp_c();
    let feels = sample.feels_like_c;
    let label = units.temperature_label();

    let text = match feels.cmp(&nominal) {
        Ordering::Less => format!("{} – {} °{}", paint(feels), paint(nominal), label),
        Ordering::Greater => format!("{} – {} °{}", paint(nominal), paint(feels), label),
        Ordering::Equal => format!("{} °{}", paint(feels), label),
    };
    pad_to(&text, FIELD_WIDTH)
}

/// Direction arrow and speed, with the gust only when it exceeds the speed.
pub fn format_wind(sample: &WeatherSample, units: DisplayUnits) -> String {
    let paint = |kmh: i32| grade_wind_speed(kmh).paint(units.speed(kmh));
    let arrow = sample.winddir_16_point.arrow();
    let speed = sample.windspeed_kmph;
    let gust = sample.wind_gust_kmph;

    let text = if gust > speed {
        format!(
            "{} {} – {} {}",
            arrow,
            paint(speed),
            paint(gust),
            units.speed_label()
        )
    } else {
        format!("{} {} {}", arrow, paint(speed), units.speed_label())
    };
    pad_to(&text, FIELD_WIDTH)
}

pub fn format_visibility(sample: &WeatherSample, units: DisplayUnits) -> String {
    let text = format!(
        "{} {}",
        units.distance(sample.visible_dist_km),
        units.distance_label()
    );
    pad_to(&text, FIELD_WIDTH)
}

/// Amount to one decimal, followed by `| NN%` when a chance was reported.
pub fn format_rain(sample: &WeatherSample, units: DisplayUnits) -> String {
    let amount = units.precipitation(sample.precip_mm);
    let label = units.precipitation_label();
    let text = match sample.chance_of_rain() {
        Some(chance) => format!("{:.1} {} | {}%", amount, label, chance),
        None => format!("{:.1} {}", amount, label),
    };
    pad_to(&text, FIELD_WIDTH)
}

const ELLIPSIS: &str = "…";

/// Fit a description to exactly `width` visible characters, ending in an
/// ellipsis when it had to be cut.
pub fn fit_description(desc: &str, width: usize) -> String {
    if width == 0 || visible_width(desc) <= width {
        return pad_to(desc, width);
    }
    format!("{}{}", pad_to(desc, width - 1), ELLIPSIS)
}
