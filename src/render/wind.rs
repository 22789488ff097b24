//! Wind direction arrows
//!
//! Sixteen compass points collapse onto eight arrows: each point shares its
//! arrow with the neighbouring point clockwise of the octant boundary. The
//! arrow shows where the wind blows *to*, so a northerly wind points down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the sixteen compass points a wind direction is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassPoint {
    #[default]
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 16] = [
        Self::N,
        Self::Nne,
        Self::Ne,
        Self::Ene,
        Self::E,
        Self::Ese,
        Self::Se,
        Self::Sse,
        Self::S,
        Self::Ssw,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    /// Compass label, e.g. `"NNE"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "NNE",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::Sse => "SSE",
            Self::S => "S",
            Self::Ssw => "SSW",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }

    /// Bold arrow glyph for this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::N | Self::Nne => "\x1b[1m↓\x1b[0m",
            Self::Ne | Self::Ene => "\x1b[1m↙\x1b[0m",
            Self::E | Self::Ese => "\x1b[1m←\x1b[0m",
            Self::Se | Self::Sse => "\x1b[1m↖\x1b[0m",
            Self::S | Self::Ssw => "\x1b[1m↑\x1b[0m",
            Self::Sw | Self::Wsw => "\x1b[1m↗\x1b[0m",
            Self::W | Self::Wnw => "\x1b[1m→\x1b[0m",
            Self::Nw | Self::Nnw => "\x1b[1m↘\x1b[0m",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the sixteen compass labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown compass point: {0:?}")]
pub struct UnknownCompassPoint(pub String);

impl FromStr for CompassPoint {
    type Err = UnknownCompassPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|point| point.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCompassPoint(s.to_string()))
    }
}
