//! End-to-end rendering of fixture documents

use wego::forecast::{load_forecast, parse_forecast};
use wego::render::ansi::visible_width;
use wego::render::table::{TABLE_HEIGHT, TABLE_WIDTH};
use wego::{render_report, DisplayUnits, RenderContext, ReportError};

use crate::helpers::{fixture_path, load_fixture};

fn render_fixture(units: DisplayUnits) -> Vec<String> {
    let input = parse_forecast(&load_fixture("forecast.json"))
        .unwrap()
        .into_report_input(3)
        .unwrap();
    let ctx = RenderContext::new(units).with_color(false);
    render_report(&input.current, &input.days, &ctx)
}

#[test]
fn fixture_renders_current_block_and_three_tables() {
    let lines = render_fixture(DisplayUnits::Metric);
    assert_eq!(lines.len(), 5 + 3 * TABLE_HEIGHT);

    assert!(lines[0].ends_with("Partly cloudy"));
    assert!(lines[1].contains("12 – 14 °C"));

    for table in lines[5..].chunks(TABLE_HEIGHT) {
        for line in table {
            assert_eq!(visible_width(line), TABLE_WIDTH, "misaligned: {:?}", line);
        }
    }
}

#[test]
fn tables_follow_document_order() {
    let lines = render_fixture(DisplayUnits::Metric);
    assert!(lines[6].contains("┤ Fri 16. Oct ├"));
    assert!(lines[6 + TABLE_HEIGHT].contains("┤ Sat 17. Oct ├"));
    assert!(lines[6 + 2 * TABLE_HEIGHT].contains("┤ Sun 18. Oct ├"));
}

#[test]
fn zero_temperature_falls_back_to_secondary_reading() {
    let lines = render_fixture(DisplayUnits::Metric);
    // Noon block of the first day, temperature line
    let noon = &lines[5 + 5];
    assert!(noon.contains("14 °C"), "{}", noon);
}

#[test]
fn empty_chance_of_rain_is_omitted() {
    let lines = render_fixture(DisplayUnits::Metric);
    let rain = &lines[5 + 8];
    assert!(rain.contains("0.0 mm"));
    assert!(rain.contains("65%"));
    assert_eq!(rain.matches('%').count(), 3);
}

#[test]
fn long_descriptions_are_cut_with_ellipsis() {
    let lines = render_fixture(DisplayUnits::Metric);
    let descriptions = &lines[5 + TABLE_HEIGHT + 4];
    assert_eq!(descriptions.matches("Condition numb…").count(), 4);
}

#[test]
fn empty_day_shows_placeholder_blocks() {
    let lines = render_fixture(DisplayUnits::Metric);
    let descriptions = &lines[5 + 2 * TABLE_HEIGHT + 4];
    assert_eq!(descriptions.matches("No data").count(), 4);
}

#[test]
fn imperial_units_convert_every_field() {
    let lines = render_fixture(DisplayUnits::Imperial);
    // 12 °C and 14 °C
    assert!(lines[1].contains("53 – 57 °F"));
    // 15 km/h gusting 28 km/h
    assert!(lines[2].contains("9 – 17 mph"));
    assert!(lines[3].contains("6 mi"));
    assert!(lines[4].contains("0.0 in"));
}

#[test]
fn colored_output_keeps_alignment() {
    let input = parse_forecast(&load_fixture("forecast.json"))
        .unwrap()
        .into_report_input(1)
        .unwrap();
    let lines = render_report(&input.current, &input.days, &RenderContext::default());
    assert!(lines.iter().any(|line| line.contains("\x1b[38;5;")));
    for line in &lines[5..] {
        assert_eq!(visible_width(line), TABLE_WIDTH);
    }
}

#[test]
fn missing_current_conditions_is_reported() {
    let forecast = load_forecast(&fixture_path("no_current.json")).unwrap();
    assert!(matches!(
        forecast.into_report_input(3),
        Err(ReportError::NoCurrentConditions)
    ));
}

#[test]
fn current_only_document_needs_zero_days() {
    let forecast = load_forecast(&fixture_path("current_only.json")).unwrap();
    assert!(matches!(
        forecast.clone().into_report_input(1),
        Err(ReportError::NoForecast)
    ));
    let input = forecast.into_report_input(0).unwrap();
    assert!(input.days.is_empty());
    assert!(input.location.is_none());
}

#[test]
fn hostile_values_keep_every_line_aligned() {
    let json = r#"{
        "current": { "temp_c": 2000000000, "windspeed_kmph": 2147483647 },
        "days": [ { "date": "2026-10-16", "hourly": [
            { "time": 900, "weather_desc": "晴れ時々曇り", "chance_of_rain": "\u001b[5" },
            { "time": 1200, "temp_c": -2147483648, "weather_desc": "\u001b[31" },
            { "time": 1800, "visible_dist_km": 2147483647 },
            { "time": 2200, "wind_gust_kmph": 2147483647 }
        ] } ]
    }"#;
    let input = parse_forecast(json).unwrap().into_report_input(1).unwrap();
    let ctx = RenderContext::new(DisplayUnits::Imperial);
    let lines = render_report(&input.current, &input.days, &ctx);
    for line in &lines[5..] {
        assert_eq!(visible_width(line), TABLE_WIDTH, "{:?}", line);
    }
}
