//! Reading forecast documents and checking report preconditions

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use super::{Forecast, ForecastDay, Location, WeatherSample};
use crate::error::ReportError;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Parse a forecast document from JSON text.
pub fn parse_forecast(json: &str) -> Result<Forecast, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a forecast document from `path`, or from stdin when `path` is `-`.
pub fn load_forecast(path: &Path) -> Result<Forecast, ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let contents = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };

    debug!(path = %path.display(), bytes = contents.len(), "Read forecast document");
    parse_forecast(&contents)
}

/// Forecast data that passed the report preconditions.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInput {
    pub location: Option<Location>,
    pub current: WeatherSample,
    /// At most the requested number of days, in supplied order
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    /// Check that the data needed for a report with `max_days` forecast
    /// days is present, keeping only the first `max_days` days.
    ///
    /// A missing day list is only an error when days were requested.
    pub fn into_report_input(self, max_days: usize) -> Result<ReportInput, ReportError> {
        let current = self.current.ok_or(ReportError::NoCurrentConditions)?;

        let days = if max_days == 0 {
            Vec::new()
        } else {
            let mut days = self.days.ok_or(ReportError::NoForecast)?;
            days.truncate(max_days);
            days
        };

        Ok(ReportInput {
            location: self.location,
            current,
            days,
        })
    }
}
