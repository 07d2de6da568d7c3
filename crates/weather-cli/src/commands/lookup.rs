use clap::ArgMatches;
use tracing::{error, info};

use weather_core::format::{format_error_json, render_report};
use weather_core::weather::lookup_weather;
use weather_core::{
    Configuration, LookupError, LookupRequest, OpenMeteoClient, OutputFormat, WeatherError,
};

pub(crate) fn handle_lookup_command(
    matches: &ArgMatches,
    config: &Configuration,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = matches
        .get_one::<String>("format")
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or_else(|| config.default_format());
    let forecast_days = matches.get_one::<u8>("forecast").copied();

    let result = match matches.get_one::<String>("city") {
        Some(city) => OpenMeteoClient::new().and_then(|client| {
            let request = LookupRequest::new(city.clone()).with_forecast_days(forecast_days);
            lookup_weather(&client, &request)
        }),
        None => Err(LookupError::MissingCity),
    };

    match result {
        Ok(report) => {
            println!("{}", render_report(&report, format));
            info!(
                event = "cli.lookup_completed",
                city = report.location.name,
                format = %format
            );
            Ok(())
        }
        Err(e) => {
            match format {
                OutputFormat::Json => println!("{}", format_error_json(&e.to_string())),
                OutputFormat::Text => eprintln!("❌ {}", e),
            }
            error!(
                event = "cli.lookup_failed",
                error_code = e.error_code(),
                user_error = e.is_user_error(),
                error = %e
            );
            Err(e.into())
        }
    }
}
