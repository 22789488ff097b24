//! Five-line ASCII-art weather icons
//!
//! Condition codes map many-to-one onto icon categories. Codes outside the
//! table fall back to [`Icon::Unknown`].

/// Height of every icon, in lines.
pub const ICON_HEIGHT: usize = 5;

/// Visible width of every icon line.
pub const ICON_WIDTH: usize = 13;

pub type IconLines = [&'static str; ICON_HEIGHT];

/// Icon category for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Unknown,
    Sunny,
    PartlyCloudy,
    Cloudy,
    VeryCloudy,
    LightShowers,
    HeavyShowers,
    LightSnowShowers,
    HeavySnowShowers,
    LightSleetShowers,
    ThunderyShowers,
    ThunderyHeavyRain,
    ThunderySnowShowers,
    LightRain,
    HeavyRain,
    LightSnow,
    HeavySnow,
    LightSleet,
    Fog,
}

impl Icon {
    /// Category for a numeric condition code.
    pub fn for_code(code: i32) -> Self {
        match code {
            113 => Self::Sunny,
            116 => Self::PartlyCloudy,
            119 => Self::Cloudy,
            122 => Self::VeryCloudy,
            143 | 248 | 260 => Self::Fog,
            176 | 263 | 353 => Self::LightShowers,
            179 | 362 | 365 | 374 => Self::LightSleetShowers,
            182 | 185 | 281 | 284 | 311 | 314 | 317 | 350 | 377 => Self::LightSleet,
            200 | 386 => Self::ThunderyShowers,
            227 | 320 => Self::LightSnow,
            230 | 329 | 332 | 338 => Self::HeavySnow,
            266 | 293 | 296 => Self::LightRain,
            299 | 305 | 356 => Self::HeavyShowers,
            302 | 308 | 359 => Self::HeavyRain,
            323 | 326 | 368 => Self::LightSnowShowers,
            // 395 is thundery heavy snow, drawn with the heavy snow showers icon
            335 | 371 | 395 => Self::HeavySnowShowers,
            389 => Self::ThunderyHeavyRain,
            392 => Self::ThunderySnowShowers,
            _ => Self::Unknown,
        }
    }

    /// The five glyph lines of this icon.
    pub fn lines(self) -> &'static IconLines {
        match self {
            Self::Unknown => &UNKNOWN,
            Self::Sunny => &SUNNY,
            Self::PartlyCloudy => &PARTLY_CLOUDY,
            Self::Cloudy => &CLOUDY,
            Self::VeryCloudy => &VERY_CLOUDY,
            Self::LightShowers => &LIGHT_SHOWERS,
            Self::HeavyShowers => &HEAVY_SHOWERS,
            Self::LightSnowShowers => &LIGHT_SNOW_SHOWERS,
            Self::HeavySnowShowers => &HEAVY_SNOW_SHOWERS,
            Self::LightSleetShowers => &LIGHT_SLEET_SHOWERS,
            Self::ThunderyShowers => &THUNDERY_SHOWERS,
            Self::ThunderyHeavyRain => &THUNDERY_HEAVY_RAIN,
            Self::ThunderySnowShowers => &THUNDERY_SNOW_SHOWERS,
            Self::LightRain => &LIGHT_RAIN,
            Self::HeavyRain => &HEAVY_RAIN,
            Self::LightSnow => &LIGHT_SNOW,
            Self::HeavySnow => &HEAVY_SNOW,
            Self::LightSleet => &LIGHT_SLEET,
            Self::Fog => &FOG,
        }
    }

    pub const ALL: [Icon; 19] = [
        Self::Unknown,
        Self::Sunny,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::VeryCloudy,
        Self::LightShowers,
        Self::HeavyShowers,
        Self::LightSnowShowers,
        Self::HeavySnowShowers,
        Self::LightSleetShowers,
        Self::ThunderyShowers,
        Self::ThunderyHeavyRain,
        Self::ThunderySnowShowers,
        Self::LightRain,
        Self::HeavyRain,
        Self::LightSnow,
        Self::HeavySnow,
        Self::LightSleet,
        Self::Fog,
    ];
}

const UNKNOWN: IconLines = [
    "    .-.      ",
    "     __)     ",
    "    (        ",
    "     `-’     ",
    "      •      ",
];

const SUNNY: IconLines = [
    "\x1b[38;5;226m    \\   /    \x1b[0m",
    "\x1b[38;5;226m     .-.     \x1b[0m",
    "\x1b[38;5;226m  ― (   ) ―  \x1b[0m",
    "\x1b[38;5;226m     `-’     \x1b[0m",
    "\x1b[38;5;226m    /   \\    \x1b[0m",
];

const PARTLY_CLOUDY: IconLines = [
    "\x1b[38;5;226m   \\  /\x1b[0m      ",
    "\x1b[38;5;226m _ /\"\"\x1b[38;5;250m.-.    \x1b[0m",
    "\x1b[38;5;226m   \\_\x1b[38;5;250m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;250m(___(__) \x1b[0m",
    "             ",
];

const CLOUDY: IconLines = [
    "             ",
    "\x1b[38;5;250m     .--.    \x1b[0m",
    "\x1b[38;5;250m  .-(    ).  \x1b[0m",
    "\x1b[38;5;250m (___.__)__) \x1b[0m",
    "             ",
];

const VERY_CLOUDY: IconLines = [
    "             ",
    "\x1b[38;5;240;1m     .--.    \x1b[0m",
    "\x1b[38;5;240;1m  .-(    ).  \x1b[0m",
    "\x1b[38;5;240;1m (___.__)__) \x1b[0m",
    "             ",
];

const LIGHT_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;250m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;250m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;250m(___(__) \x1b[0m",
    "\x1b[38;5;111m     ‘ ‘ ‘ ‘ \x1b[0m",
    "\x1b[38;5;111m    ‘ ‘ ‘ ‘  \x1b[0m",
];

const HEAVY_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;240;1m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;240;1m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;240;1m(___(__) \x1b[0m",
    "\x1b[38;5;21;1m   ‚‘‚‘‚‘‚‘  \x1b[0m",
    "\x1b[38;5;21;1m   ‚’‚’‚’‚’  \x1b[0m",
];

const LIGHT_SNOW_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;250m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;250m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;250m(___(__) \x1b[0m",
    "\x1b[38;5;255m     *  *  * \x1b[0m",
    "\x1b[38;5;255m    *  *  *  \x1b[0m",
];

const HEAVY_SNOW_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;240;1m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;240;1m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;240;1m(___(__) \x1b[0m",
    "\x1b[38;5;255;1m    * * * *  \x1b[0m",
    "\x1b[38;5;255;1m   * * * *   \x1b[0m",
];

const LIGHT_SLEET_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;250m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;250m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;250m(___(__) \x1b[0m",
    "\x1b[38;5;111m     ‘ \x1b[38;5;255m*\x1b[38;5;111m ‘ \x1b[38;5;255m* \x1b[0m",
    "\x1b[38;5;255m    *\x1b[38;5;111m ‘ \x1b[38;5;255m*\x1b[38;5;111m ‘  \x1b[0m",
];

const THUNDERY_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;250m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;250m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;250m(___(__) \x1b[0m",
    "\x1b[38;5;228;5m    ⚡\x1b[38;5;111;25m‘ ‘\x1b[38;5;228;5m⚡\x1b[38;5;111;25m‘ ‘ \x1b[0m",
    "\x1b[38;5;111m    ‘ ‘ ‘ ‘  \x1b[0m",
];

const THUNDERY_HEAVY_RAIN: IconLines = [
    "\x1b[38;5;240;1m     .-.     \x1b[0m",
    "\x1b[38;5;240;1m    (   ).   \x1b[0m",
    "\x1b[38;5;240;1m   (___(__)  \x1b[0m",
    "\x1b[38;5;21;1m  ‚‘\x1b[38;5;228;5m⚡\x1b[38;5;21;25m‘‚\x1b[38;5;228;5m⚡\x1b[38;5;21;25m‚‘   \x1b[0m",
    "\x1b[38;5;21;1m  ‚’‚’\x1b[38;5;228;5m⚡\x1b[38;5;21;25m’‚’   \x1b[0m",
];

const THUNDERY_SNOW_SHOWERS: IconLines = [
    "\x1b[38;5;226m _`/\"\"\x1b[38;5;250m.-.    \x1b[0m",
    "\x1b[38;5;226m  ,\\_\x1b[38;5;250m(   ).  \x1b[0m",
    "\x1b[38;5;226m   /\x1b[38;5;250m(___(__) \x1b[0m",
    "\x1b[38;5;255m     *\x1b[38;5;228;5m⚡\x1b[38;5;255;25m *\x1b[38;5;228;5m⚡\x1b[38;5;255;25m * \x1b[0m",
    "\x1b[38;5;255m    *  *  *  \x1b[0m",
];

const LIGHT_RAIN: IconLines = [
    "\x1b[38;5;250m     .-.     \x1b[0m",
    "\x1b[38;5;250m    (   ).   \x1b[0m",
    "\x1b[38;5;250m   (___(__)  \x1b[0m",
    "\x1b[38;5;111m    ‘ ‘ ‘ ‘  \x1b[0m",
    "\x1b[38;5;111m   ‘ ‘ ‘ ‘   \x1b[0m",
];

const HEAVY_RAIN: IconLines = [
    "\x1b[38;5;240;1m     .-.     \x1b[0m",
    "\x1b[38;5;240;1m    (   ).   \x1b[0m",
    "\x1b[38;5;240;1m   (___(__)  \x1b[0m",
    "\x1b[38;5;21;1m  ‚‘‚‘‚‘‚‘   \x1b[0m",
    "\x1b[38;5;21;1m  ‚’‚’‚’‚’   \x1b[0m",
];

const LIGHT_SNOW: IconLines = [
    "\x1b[38;5;250m     .-.     \x1b[0m",
    "\x1b[38;5;250m    (   ).   \x1b[0m",
    "\x1b[38;5;250m   (___(__)  \x1b[0m",
    "\x1b[38;5;255m    *  *  *  \x1b[0m",
    "\x1b[38;5;255m   *  *  *   \x1b[0m",
];

const HEAVY_SNOW: IconLines = [
    "\x1b[38;5;240;1m     .-.     \x1b[0m",
    "\x1b[38;5;240;1m    (   ).   \x1b[0m",
    "\x1b[38;5;240;1m   (___(__)  \x1b[0m",
    "\x1b[38;5;255;1m   * * * *   \x1b[0m",
    "\x1b[38;5;255;1m  * * * *    \x1b[0m",
];

const LIGHT_SLEET: IconLines = [
    "\x1b[38;5;250m     .-.     \x1b[0m",
    "\x1b[38;5;250m    (   ).   \x1b[0m",
    "\x1b[38;5;250m   (___(__)  \x1b[0m",
    "\x1b[38;5;111m    ‘ \x1b[38;5;255m*\x1b[38;5;111m ‘ \x1b[38;5;255m*  \x1b[0m",
    "\x1b[38;5;255m   *\x1b[38;5;111m ‘ \x1b[38;5;255m*\x1b[38;5;111m ‘   \x1b[0m",
];

const FOG: IconLines = [
    "             ",
    "\x1b[38;5;251m _ - _ - _ - \x1b[0m",
    "\x1b[38;5;251m  _ - _ - _  \x1b[0m",
    "\x1b[38;5;251m _ - _ - _ - \x1b[0m",
    "             ",
];
