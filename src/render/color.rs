//! Color grading for temperatures and wind speeds
//!
//! Values are mapped onto a fixed gradient of xterm-256 colors, ordered from
//! the coldest hue to the warmest. Both graders are total step functions
//! that saturate at the ends of the gradient.

use std::fmt;

use super::ansi::ANSI_RESET;

/// One band of the xterm-256 gradient, declared coldest first so that the
/// derived ordering is perceptual warmth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBand {
    Blue1,
    DodgerBlue2,
    DodgerBlue1,
    DeepSkyBlue1,
    Turquoise2,
    Cyan1,
    Cyan2,
    MediumSpringGreen,
    SpringGreen1,
    SpringGreen2,
    Green1,
    Chartreuse2,
    Chartreuse1,
    GreenYellow,
    Yellow2,
    Yellow1,
    Gold1,
    Orange1,
    DarkOrange,
    OrangeRed1,
    Red1,
}

impl ColorBand {
    /// xterm-256 palette index for this band.
    pub fn xterm_index(self) -> u8 {
        match self {
            Self::Blue1 => 21,
            Self::DodgerBlue2 => 27,
            Self::DodgerBlue1 => 33,
            Self::DeepSkyBlue1 => 39,
            Self::Turquoise2 => 45,
            Self::Cyan1 => 51,
            Self::Cyan2 => 50,
            Self::MediumSpringGreen => 49,
            Self::SpringGreen1 => 48,
            Self::SpringGreen2 => 47,
            Self::Green1 => 46,
            Self::Chartreuse2 => 82,
            Self::Chartreuse1 => 118,
            Self::GreenYellow => 154,
            Self::Yellow2 => 190,
            Self::Yellow1 => 226,
            Self::Gold1 => 220,
            Self::Orange1 => 214,
            Self::DarkOrange => 208,
            Self::OrangeRed1 => 202,
            Self::Red1 => 196,
        }
    }

    /// Foreground escape, index zero-padded to three digits.
    pub fn escape(self) -> String {
        format!("\x1b[38;5;{:03}m", self.xterm_index())
    }

    /// Wrap a displayed value in this band's color, closed by a reset.
    pub fn paint<T: fmt::Display>(self, value: T) -> String {
        format!("{}{}{}", self.escape(), value, ANSI_RESET)
    }
}

/// Band for a temperature in degrees Celsius.
pub fn grade_temperature(celsius: i32) -> ColorBand {
    match celsius {
        -15..=-13 => ColorBand::DodgerBlue2,
        -12..=-10 => ColorBand::DodgerBlue1,
        -9..=-7 => ColorBand::DeepSkyBlue1,
        -6..=-4 => ColorBand::Turquoise2,
        -3..=-1 => ColorBand::Cyan1,
        0..=1 => ColorBand::Cyan2,
        2..=3 => ColorBand::MediumSpringGreen,
        4..=5 => ColorBand::SpringGreen1,
        6..=7 => ColorBand::SpringGreen2,
        8..=9 => ColorBand::Green1,
        10..=12 => ColorBand::Chartreuse2,
        13..=15 => ColorBand::Chartreuse1,
        16..=18 => ColorBand::GreenYellow,
        19..=21 => ColorBand::Yellow2,
        22..=24 => ColorBand::Yellow1,
        25..=27 => ColorBand::Gold1,
        28..=30 => ColorBand::Orange1,
        31..=33 => ColorBand::DarkOrange,
        34..=36 => ColorBand::OrangeRed1,
        t if t > 0 => ColorBand::Red1,
        _ => ColorBand::Blue1,
    }
}

/// Band for a wind speed in km/h. Calm (and nonsensical negative) speeds
/// share the first green band.
pub fn grade_wind_speed(kmh: i32) -> ColorBand {
    match kmh {
        1..=3 => ColorBand::Chartreuse2,
        4..=6 => ColorBand::Chartreuse1,
        7..=9 => ColorBand::GreenYellow,
        10..=12 => ColorBand::Yellow2,
        13..=15 => ColorBand::Yellow1,
        16..=19 => ColorBand::Gold1,
        20..=23 => ColorBand::Orange1,
        24..=27 => ColorBand::DarkOrange,
        28..=31 => ColorBand::OrangeRed1,
        s if s > 0 => ColorBand::Red1,
        _ => ColorBand::Green1,
    }
}
