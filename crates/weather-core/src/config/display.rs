use std::path::Path;

use crate::config::types::Configuration;

/// Render the configuration as `key = value` lines under the file path.
///
/// Strings are quoted, numbers are bare. Unrecognised keys kept from the file
/// follow the recognised ones.
pub fn render_configuration(path: &Path, config: &Configuration) -> String {
    let mut lines = vec![
        format!("Config file: {}", path.display()),
        "Current configuration:".to_string(),
    ];

    for (key, value) in config.entries() {
        lines.push(format!("  {} = {}", key, value.quoted()));
    }

    for (key, value) in config.extra() {
        lines.push(format!("  {} = {}", key, value));
    }

    lines.join("\n")
}
