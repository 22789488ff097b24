//! Boxed table for one forecast day
//!
//! Four day-part blocks side by side between box-drawing borders, under a
//! header carrying the date banner.

use chrono::NaiveDate;

use super::condition::{format_condition, format_missing, ConditionMode, BLOCK_WIDTH};
use super::icons::ICON_HEIGHT;
use super::slots::{select_slots, SLOT_COUNT};
use super::RenderContext;
use crate::forecast::ForecastDay;

/// Visible width of every table line.
pub const TABLE_WIDTH: usize = 1 + SLOT_COUNT * (BLOCK_WIDTH + 1);

/// Lines per day table: four header lines, the blocks, one footer line.
pub const TABLE_HEIGHT: usize = 4 + ICON_HEIGHT + 1;

const BANNER_TOP: &str = "                                                       ┌─────────────┐                                                       ";
const COLUMN_TITLES: &str = "│           Morning            │             Noon      └──────┬──────┘    Evening            │            Night             │";
const HEADER_RULE: &str = "├──────────────────────────────┼──────────────────────────────┼──────────────────────────────┼──────────────────────────────┤";
const FOOTER: &str = "└──────────────────────────────┴──────────────────────────────┴──────────────────────────────┴──────────────────────────────┘";

/// Date as shown in the banner, e.g. `Fri 16. Oct`.
pub fn format_banner_date(date: NaiveDate) -> String {
    date.format("%a %d. %b").to_string()
}

fn banner_line(date: NaiveDate) -> String {
    let column = "─".repeat(BLOCK_WIDTH);
    let half = "─".repeat(23);
    format!(
        "┌{column}┬{half}┤ {} ├{half}┬{column}┐",
        format_banner_date(date)
    )
}

/// Build the complete table for `day`.
pub fn build_day_table(day: &ForecastDay, ctx: &RenderContext) -> Vec<String> {
    let mut body: [String; ICON_HEIGHT] = std::array::from_fn(|_| String::from("│"));

    for slot in select_slots(&day.hourly) {
        let block = match slot {
            Some(sample) => format_condition(sample, ConditionMode::Forecast, ctx),
            None => format_missing(),
        };
        for (line, block_line) in body.iter_mut().zip(block) {
            line.push_str(&block_line);
            line.push('│');
        }
    }

    let mut table = Vec::with_capacity(TABLE_HEIGHT);
    table.push(BANNER_TOP.to_string());
    table.push(banner_line(day.date));
    table.push(COLUMN_TITLES.to_string());
    table.push(HEADER_RULE.to_string());
    table.extend(body);
    table.push(FOOTER.to_string());
    table
}
