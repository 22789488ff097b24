//! Errors raised while preparing a report.
//!
//! Rendering itself cannot fail; these cover reading the forecast document
//! and the precondition checks done before anything is formatted.

use std::path::PathBuf;

/// Errors that can occur before the render core is invoked.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read forecast from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed forecast document: {0}")]
    MalformedForecast(#[from] serde_json::Error),

    #[error("No weather data available.")]
    NoCurrentConditions,

    #[error("No detailed weather forecast available.")]
    NoForecast,
}
