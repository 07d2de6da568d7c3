use clap::ArgMatches;
use tracing::error;

use weather_core::config::ConfigAccessor;
use weather_core::{ConfigError, Configuration, WeatherError, events};

mod config;
mod lookup;

/// Dispatch to a configuration command or, failing that, a weather lookup.
///
/// `loaded` is the result of reading the config before argument parsing.
/// Only `--config-reset` proceeds when it is an error, since reset never
/// reads the file.
pub fn run_command(
    matches: &ArgMatches,
    accessor: &ConfigAccessor,
    loaded: Result<Configuration, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    if matches.get_flag("config-reset") {
        return config::handle_reset_command(accessor);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            error!(
                event = "cli.config.load_failed",
                error_code = e.error_code(),
                error = %e
            );
            return Err(e.into());
        }
    };

    if matches.get_flag("config-show") {
        return config::handle_show_command(accessor);
    }

    if let Some(assignment) = matches.get_one::<String>("config") {
        return config::handle_set_command(accessor, assignment);
    }

    lookup::handle_lookup_command(matches, &config)
}
