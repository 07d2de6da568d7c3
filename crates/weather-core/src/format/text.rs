use crate::weather::{CurrentWeather, DailyForecast, Location, WeatherReport, describe_weather_code};

fn temperature(value: Option<f64>) -> String {
    match value {
        Some(t) => format!("{}°C", t),
        None => "N/A".to_string(),
    }
}

fn description(code: Option<u16>) -> String {
    code.map(describe_weather_code)
        .unwrap_or_else(|| "N/A".to_string())
}

fn current_block(current: &CurrentWeather) -> Vec<String> {
    vec![
        "Current weather:".to_string(),
        format!("  Temperature: {}", temperature(current.temperature)),
        format!("  Conditions: {}", description(current.weather_code)),
    ]
}

/// Current conditions for one location.
pub fn format_text_current(location: &Location, current: &CurrentWeather) -> String {
    let mut lines = vec![
        format!("City: {} ({})", location.name, location.country),
        format!(
            "Coordinates: {:.2}, {:.2}",
            location.latitude, location.longitude
        ),
        String::new(),
    ];
    lines.extend(current_block(current));
    lines.join("\n")
}

/// Current conditions followed by one line per forecast day.
pub fn format_text_forecast(
    location: &Location,
    current: &CurrentWeather,
    forecast: &[DailyForecast],
) -> String {
    let mut lines = vec![
        format!("City: {} ({})", location.name, location.country),
        String::new(),
    ];
    lines.extend(current_block(current));
    lines.push(String::new());
    lines.push(format!("{}-day forecast:", forecast.len()));

    for day in forecast {
        lines.push(format!(
            "  {}: {}°C ~ {}°C, {}",
            day.date,
            day.min_temp,
            day.max_temp,
            describe_weather_code(day.weather_code)
        ));
    }

    lines.join("\n")
}

/// Text rendering of a full report, choosing the forecast layout when present.
pub fn format_text(report: &WeatherReport) -> String {
    match &report.forecast {
        Some(forecast) => format_text_forecast(&report.location, &report.current, forecast),
        None => format_text_current(&report.location, &report.current),
    }
}
