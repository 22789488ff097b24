//! Report rendering
//!
//! Turns forecast data into fixed-width, ANSI-colored text lines:
//!
//! - `ansi`: visible-width measurement and fitting of escaped strings
//! - `units`, `color`, `wind`, `icons`: value conversion and lookup tables
//! - `condition`: one sample as five icon + field lines
//! - `slots`: picking the morning/noon/evening/night samples of a day
//! - `table`: the boxed table for one day
//! - `report`: current conditions followed by every day table

pub mod ansi;
pub mod color;
pub mod condition;
pub mod icons;
pub mod report;
pub mod slots;
pub mod table;
pub mod units;
pub mod wind;

pub use condition::{format_condition, ConditionMode};
pub use report::{render_report, write_report};
pub use slots::{select_slots, DayPart};
pub use table::build_day_table;
pub use units::DisplayUnits;

/// Settings fixed for the duration of one render.
///
/// Passed by reference into every formatter so that two reports with
/// different settings can be produced side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub units: DisplayUnits,
    /// Keep color escapes in the emitted lines
    pub color: bool,
}

impl RenderContext {
    pub fn new(units: DisplayUnits) -> Self {
        Self { units, color: true }
    }

    pub fn with_color(self, color: bool) -> Self {
        Self { color, ..self }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(DisplayUnits::default())
    }
}
