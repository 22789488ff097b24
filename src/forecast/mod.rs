//! Forecast data model
//!
//! Values arrive already parsed from whatever provider produced them and are
//! read-only to the renderer. All quantities are metric.

mod input;

pub use input::{load_forecast, parse_forecast, ReportInput, STDIN_PATH};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::render::wind::CompassPoint;

/// One observed or forecast weather point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSample {
    /// Time of day packed as `HHMM`, e.g. `930` for 09:30
    pub time: i32,
    /// Nominal temperature; `0` means "not reported" and falls back to `temp_c2`
    pub temp_c: i32,
    /// Secondary temperature reported by some providers
    pub temp_c2: i32,
    pub feels_like_c: i32,
    pub windspeed_kmph: i32,
    pub wind_gust_kmph: i32,
    pub winddir_16_point: CompassPoint,
    pub visible_dist_km: i32,
    pub precip_mm: f32,
    /// Chance of rain in percent, verbatim from the provider
    pub chance_of_rain: Option<String>,
    pub weather_code: i32,
    pub weather_desc: String,
}

impl WeatherSample {
    /// Time of day in minutes since midnight.
    pub fn minutes_since_midnight(&self) -> i32 {
        (self.time % 100) + 60 * (self.time / 100)
    }

    /// Temperature to display, treating a zero nominal reading as absent.
    pub fn nominal_temp_c(&self) -> i32 {
        if self.temp_c == 0 {
            self.temp_c2
        } else {
            self.temp_c
        }
    }

    /// Chance of rain, if the provider reported a non-empty value.
    pub fn chance_of_rain(&self) -> Option<&str> {
        self.chance_of_rain.as_deref().filter(|c| !c.is_empty())
    }
}

/// One calendar day of hourly samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub hourly: Vec<WeatherSample>,
}

/// What the forecast was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Kind of query, e.g. `City` or `LatLon`
    pub kind: String,
    pub query: String,
}

/// A complete forecast document as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub current: Option<WeatherSample>,
    #[serde(default)]
    pub days: Option<Vec<ForecastDay>>,
}
