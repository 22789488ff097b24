//! wego Library
//!
//! Renders weather forecasts as ANSI-colored terminal reports: a current
//! conditions block followed by one boxed morning/noon/evening/night table
//! per forecast day.

pub mod cli;
pub mod config;
pub mod error;
pub mod forecast;
pub mod render;

pub use config::Config;
pub use error::ReportError;
pub use forecast::{Forecast, ForecastDay, WeatherSample};
pub use render::{render_report, write_report, DisplayUnits, RenderContext};
