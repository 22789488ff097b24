//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::render::DisplayUnits;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

/// How the report is drawn
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show Fahrenheit, mph, miles and inches instead of metric units
    #[serde(default)]
    pub imperial: bool,
    /// When to emit color escapes
    #[serde(default)]
    pub color: ColorMode,
}

/// What the report covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of forecast days to show after the current conditions
    #[serde(default = "default_days")]
    pub days: usize,
}

pub fn default_days() -> usize {
    3
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

/// When to emit color escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when writing to a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide whether to color, given whether stdout is a terminal and
    /// whether `NO_COLOR` is set.
    pub fn should_color(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && !no_color,
        }
    }
}

impl Config {
    pub fn display_units(&self) -> DisplayUnits {
        DisplayUnits::from_imperial(self.display.imperial)
    }

    /// Apply command-line overrides on top of the loaded file.
    pub fn with_overrides(
        mut self,
        days: Option<usize>,
        imperial: Option<bool>,
        color: Option<ColorMode>,
    ) -> Self {
        if let Some(days) = days {
            self.forecast.days = days;
        }
        if let Some(imperial) = imperial {
            self.display.imperial = imperial;
        }
        if let Some(color) = color {
            self.display.color = color;
        }
        self
    }
}
