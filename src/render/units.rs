//! Metric to imperial conversions and unit labels
//!
//! Forecast data is always metric. Conversions are applied to displayed
//! numbers only, and use integer arithmetic that truncates toward zero.
//! Intermediate products are computed in `i64` and saturate back to `i32`.

/// Unit system used for an entire render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayUnits {
    #[default]
    Metric,
    Imperial,
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Celsius to Fahrenheit, scaled by ten before truncating.
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    saturate((i64::from(celsius) * 18 + 320) / 10)
}

/// km/h to mph.
pub fn kmh_to_mph(kmh: i32) -> i32 {
    saturate(i64::from(kmh) * 1000 / 1609)
}

/// Kilometres to miles.
pub fn km_to_miles(km: i32) -> i32 {
    saturate(i64::from(km) * 621 / 1000)
}

/// Millimetres to inches.
pub fn mm_to_inches(mm: f32) -> f32 {
    mm * 0.039
}

impl DisplayUnits {
    /// Pick the unit system from a resolved "imperial" switch.
    pub fn from_imperial(imperial: bool) -> Self {
        if imperial {
            Self::Imperial
        } else {
            Self::Metric
        }
    }

    pub fn is_imperial(self) -> bool {
        self == Self::Imperial
    }

    pub fn temperature(self, celsius: i32) -> i32 {
        match self {
            Self::Metric => celsius,
            Self::Imperial => celsius_to_fahrenheit(celsius),
        }
    }

    pub fn speed(self, kmh: i32) -> i32 {
        match self {
            Self::Metric => kmh,
            Self::Imperial => kmh_to_mph(kmh),
        }
    }

    pub fn distance(self, km: i32) -> i32 {
        match self {
            Self::Metric => km,
            Self::Imperial => km_to_miles(km),
        }
    }

    pub fn precipitation(self, mm: f32) -> f32 {
        match self {
            Self::Metric => mm,
            Self::Imperial => mm_to_inches(mm),
        }
    }

    /// Temperature label, shown after a degree sign.
    pub fn temperature_label(self) -> &'static str {
        match self {
            Self::Metric => "C",
            Self::Imperial => "F",
        }
    }

    pub fn speed_label(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    pub fn distance_label(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        }
    }

    pub fn precipitation_label(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }
}
