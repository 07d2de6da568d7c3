use tracing::{error, info};

use weather_core::WeatherError;
use weather_core::config::{ConfigAccessor, parse_assignment};

pub(crate) fn handle_show_command(
    accessor: &ConfigAccessor,
) -> Result<(), Box<dyn std::error::Error>> {
    match accessor.show() {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to show configuration: {}", e);
            error!(
                event = "cli.config.show_failed",
                error_code = e.error_code(),
                error = %e
            );
            Err(e.into())
        }
    }
}

pub(crate) fn handle_reset_command(
    accessor: &ConfigAccessor,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = accessor.reset() {
        eprintln!("❌ Failed to reset configuration: {}", e);
        error!(
            event = "cli.config.reset_failed",
            error_code = e.error_code(),
            error = %e
        );
        return Err(e.into());
    }

    println!("✅ Configuration reset to defaults.");
    info!(event = "cli.config.reset_completed");

    handle_show_command(accessor)
}

pub(crate) fn handle_set_command(
    accessor: &ConfigAccessor,
    assignment: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = parse_assignment(assignment)
        .and_then(|parsed| accessor.set(&parsed.key, &parsed.value).map(|v| (parsed.key, v)));

    match result {
        Ok((key, value)) => {
            println!("✅ Set '{}' to {}", key, value.quoted());
            info!(event = "cli.config.set_completed", key = key.as_str(), value = %value);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            error!(
                event = "cli.config.set_failed",
                assignment = assignment,
                error_code = e.error_code(),
                user_error = e.is_user_error(),
                error = %e
            );
            Err(e.into())
        }
    }
}

