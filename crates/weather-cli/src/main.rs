use weather_core::config::{ConfigAccessor, ConfigStore};
use weather_core::{events, init_logging};

mod app;
mod commands;

fn main() {
    // Logging must be up before the config is read for argument defaults.
    let verbose = verbose_requested(std::env::args().skip(1));
    init_logging(!verbose);

    let accessor = ConfigAccessor::new(ConfigStore::from_env());
    let loaded = accessor.load();
    let defaults = loaded.as_ref().cloned().unwrap_or_default();

    let matches = app::build_cli(&defaults).get_matches();

    if let Err(e) = commands::run_command(&matches, &accessor, loaded) {
        events::log_app_error(e.as_ref());
        std::process::exit(1);
    }
}

/// Scan raw arguments for `-v`/`--verbose` before clap runs.
///
/// Stops at `--`, skips the value of `--config`, and reads short-flag
/// clusters such as `-vf` up to `-f`, whose attached text is its value.
fn verbose_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--" => return false,
            "--verbose" => return true,
            "--config" => {
                args.next();
            }
            long if long.starts_with("--") => {}
            short if short.starts_with('-') => {
                for flag in short.chars().skip(1) {
                    match flag {
                        'v' => return true,
                        'f' => break,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(args: &[&str]) -> bool {
        verbose_requested(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_verbose_flag_forms() {
        assert!(scan(&["-v"]));
        assert!(scan(&["--verbose", "Lima"]));
        assert!(scan(&["Lima", "-vf"]));
        assert!(scan(&["--config-show", "-v"]));
        assert!(!scan(&["Lima"]));
    }

    #[test]
    fn test_verbose_ignores_values_and_trailing_args() {
        assert!(!scan(&["--config", "-v"]));
        assert!(!scan(&["--", "-v"]));
        assert!(!scan(&["-f3"]));
        assert!(!scan(&["--config=default_city=-v"]));
    }
}
