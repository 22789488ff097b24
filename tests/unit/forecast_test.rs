//! Unit tests for forecast documents

use wego::forecast::parse_forecast;
use wego::render::wind::CompassPoint;
use wego::ReportError;

#[test]
fn full_document_parses() {
    let json = r#"{
        "location": { "kind": "City", "query": "Berlin" },
        "current": {
            "time": 1430,
            "temp_c": 14,
            "feels_like_c": 12,
            "windspeed_kmph": 15,
            "wind_gust_kmph": 28,
            "winddir_16_point": "WSW",
            "visible_dist_km": 10,
            "precip_mm": 0.2,
            "chance_of_rain": "30",
            "weather_code": 116,
            "weather_desc": "Partly cloudy"
        },
        "days": [
            { "date": "2026-10-16", "hourly": [ { "time": 900 }, { "time": 1200 } ] }
        ]
    }"#;

    let forecast = parse_forecast(json).unwrap();
    let location = forecast.location.unwrap();
    assert_eq!(location.kind, "City");
    assert_eq!(location.query, "Berlin");

    let current = forecast.current.unwrap();
    assert_eq!(current.winddir_16_point, CompassPoint::Wsw);
    assert_eq!(current.chance_of_rain(), Some("30"));
    assert_eq!(current.minutes_since_midnight(), 14 * 60 + 30);

    let days = forecast.days.unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date.to_string(), "2026-10-16");
    assert_eq!(days[0].hourly.len(), 2);
}

#[test]
fn invalid_date_is_malformed() {
    let json = r#"{ "days": [ { "date": "16/10/2026" } ] }"#;
    assert!(matches!(
        parse_forecast(json),
        Err(ReportError::MalformedForecast(_))
    ));
}

#[test]
fn unknown_compass_point_is_malformed() {
    let json = r#"{ "current": { "winddir_16_point": "NORTH" } }"#;
    assert!(matches!(
        parse_forecast(json),
        Err(ReportError::MalformedForecast(_))
    ));
}

#[test]
fn document_without_current_fails_precondition() {
    let forecast = parse_forecast(r#"{ "days": [] }"#).unwrap();
    let err = forecast.into_report_input(3).unwrap_err();
    assert_eq!(err.to_string(), "No weather data available.");
}

#[test]
fn document_without_days_fails_only_when_days_requested() {
    let forecast = parse_forecast(r#"{ "current": {} }"#).unwrap();
    let err = forecast.clone().into_report_input(2).unwrap_err();
    assert_eq!(err.to_string(), "No detailed weather forecast available.");
    assert!(forecast.into_report_input(0).is_ok());
}
