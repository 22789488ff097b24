//! Test helper utilities

#![allow(dead_code)]

use wego::WeatherSample;

/// A sample at `time` (HHMM) with every other field zeroed.
pub fn sample_at(time: i32) -> WeatherSample {
    WeatherSample {
        time,
        ..Default::default()
    }
}

/// A fully populated sample at `time`.
pub fn sunny_sample(time: i32) -> WeatherSample {
    WeatherSample {
        time,
        temp_c: 18,
        feels_like_c: 18,
        windspeed_kmph: 10,
        wind_gust_kmph: 25,
        visible_dist_km: 10,
        precip_mm: 0.0,
        chance_of_rain: Some("0".to_string()),
        weather_code: 113,
        weather_desc: "Sunny".to_string(),
        ..Default::default()
    }
}
