use serde_json::{Value, json};

use crate::weather::{WeatherReport, describe_weather_code};

/// Pretty JSON document for a report; `forecast` is omitted when absent.
pub fn format_json(report: &WeatherReport) -> String {
    let location = &report.location;
    let current = &report.current;

    let mut document = json!({
        "city": location.name,
        "country": location.country,
        "coordinates": {
            "latitude": location.latitude,
            "longitude": location.longitude,
        },
        "current": {
            "temperature": current.temperature,
            "weather": current.weather_code.map(describe_weather_code),
            "weather_code": current.weather_code,
            "time": current.time,
        },
    });

    if let Some(forecast) = &report.forecast {
        let days: Vec<Value> = forecast
            .iter()
            .map(|day| {
                json!({
                    "date": day.date.to_string(),
                    "max_temp": day.max_temp,
                    "min_temp": day.min_temp,
                    "weather": describe_weather_code(day.weather_code),
                    "weather_code": day.weather_code,
                })
            })
            .collect();
        document["forecast"] = Value::Array(days);
    }

    to_pretty(&document)
}

/// `{"error": "<message>"}` for failures in json mode.
pub fn format_error_json(message: &str) -> String {
    to_pretty(&json!({ "error": message }))
}

fn to_pretty(value: &Value) -> String {
    // Serialising a `Value` cannot fail; fall back to compact form regardless.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
