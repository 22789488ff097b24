//! Unit tests for rendering through the public API

use chrono::NaiveDate;
use wego::render::ansi::{strip, visible_width};
use wego::render::condition::BLOCK_WIDTH;
use wego::render::table::{TABLE_HEIGHT, TABLE_WIDTH};
use wego::render::{build_day_table, format_condition, select_slots, ConditionMode, DayPart};
use wego::{render_report, DisplayUnits, ForecastDay, RenderContext};

use crate::helpers::{sample_at, sunny_sample};

#[test]
fn condition_block_is_five_fixed_width_lines() {
    let ctx = RenderContext::default();
    let lines = format_condition(&sunny_sample(1200), ConditionMode::Forecast, &ctx);
    assert_eq!(lines.len(), 5);
    for line in &lines {
        assert_eq!(visible_width(line), BLOCK_WIDTH);
    }
}

#[test]
fn imperial_block_shows_converted_values() {
    let ctx = RenderContext::new(DisplayUnits::Imperial).with_color(false);
    let lines = format_condition(&sunny_sample(1200), ConditionMode::Forecast, &ctx);
    let text: Vec<String> = lines.iter().map(|line| strip(line)).collect();
    // 18 °C is 64 °F, 10 km/h is 6 mph, 25 km/h is 15 mph, 10 km is 6 mi
    assert!(text[1].contains("64 °F"));
    assert!(text[2].contains("6 – 15 mph"));
    assert!(text[3].contains("6 mi"));
    assert!(text[4].contains("0.0 in | 0%"));
}

#[test]
fn slots_pick_nearest_samples() {
    let hourly: Vec<_> = [600, 1100, 1900, 2300].into_iter().map(sample_at).collect();
    let slots = select_slots(&hourly);
    let times: Vec<i32> = slots.iter().map(|s| s.map(|s| s.time).unwrap_or(-1)).collect();
    assert_eq!(times, vec![1100, 1100, 1900, 2300]);
    assert_eq!(DayPart::ALL[0], DayPart::Morning);
}

#[test]
fn day_table_has_fixed_shape() {
    let day = ForecastDay {
        date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        hourly: vec![sunny_sample(900), sunny_sample(2100)],
    };
    let table = build_day_table(&day, &RenderContext::default());
    assert_eq!(table.len(), TABLE_HEIGHT);
    for line in &table {
        assert_eq!(visible_width(line), TABLE_WIDTH);
    }
    assert!(table[1].contains("Fri 16. Oct"));
}

#[test]
fn report_without_days_is_current_block_only() {
    let ctx = RenderContext::default().with_color(false);
    let lines = render_report(&sunny_sample(1430), &[], &ctx);
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with("Sunny"));
}
