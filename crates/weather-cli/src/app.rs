use clap::{Arg, ArgAction, Command, value_parser};
use weather_core::Configuration;
use weather_core::config::schema::{
    self, FORMAT_CHOICES, MAX_FORECAST_DAYS, MIN_FORECAST_DAYS,
};

/// Build the argument parser, showing `defaults` in help text and applying
/// them as flag defaults.
pub fn build_cli(defaults: &Configuration) -> Command {
    let default_city = defaults.default_city();
    let forecast_days = defaults.forecast_days();
    let default_format = defaults.default_format();

    let mut city = Arg::new("city")
        .help(format!(
            "City to look up (default: {})",
            default_city.unwrap_or("none")
        ))
        .index(1);
    if let Some(default_city) = default_city {
        city = city.default_value(default_city.to_string());
    }

    Command::new("weather-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up current weather and forecasts from the command line")
        .after_help(
            "Examples:\n  \
             weather-cli Beijing                        Current weather in Beijing\n  \
             weather-cli --forecast 5 Shanghai          5-day forecast for Shanghai\n  \
             weather-cli --format json Tokyo            JSON output\n  \
             weather-cli --config default_city=Beijing  Set the default city\n  \
             weather-cli --config-show                  Show current configuration\n  \
             weather-cli --config-reset                 Restore defaults",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(city)
        .arg(
            Arg::new("forecast")
                .short('f')
                .long("forecast")
                .value_name("DAYS")
                .num_args(0..=1)
                .default_missing_value(forecast_days.to_string())
                .value_parser(value_parser!(u8).range(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS))
                .help(format!(
                    "Show an N-day forecast ({}-{}, configured default: {})",
                    MIN_FORECAST_DAYS, MAX_FORECAST_DAYS, forecast_days
                )),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(FORMAT_CHOICES.to_vec())
                .default_value(default_format.as_str())
                .help(format!("Output format (default: {})", default_format)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("KEY=VALUE")
                .help("Set a configuration value, e.g. --config default_city=Beijing")
                .long_help(config_long_help())
                .help_heading("Configuration")
                .conflicts_with_all(["config-show", "config-reset"]),
        )
        .arg(
            Arg::new("config-show")
                .long("config-show")
                .help("Show all configuration values")
                .help_heading("Configuration")
                .action(ArgAction::SetTrue)
                .conflicts_with("config-reset"),
        )
        .arg(
            Arg::new("config-reset")
                .long("config-reset")
                .help("Restore every configuration value to its default")
                .help_heading("Configuration")
                .action(ArgAction::SetTrue),
        )
}

/// `--config` help listing every recognised key with its description.
fn config_long_help() -> String {
    let mut help = String::from(
        "Set a configuration value, e.g. --config default_city=Beijing\n\nKeys:",
    );
    for spec in schema::settings() {
        help.push_str(&format!("\n  {:<16}{}", spec.key, spec.description));
    }
    help
}
