//! Rendering of weather reports as text or JSON.

pub mod json;
pub mod text;

pub use json::{format_error_json, format_json};
pub use text::{format_text, format_text_current, format_text_forecast};

use crate::config::OutputFormat;
use crate::weather::WeatherReport;

/// Render a report in the requested format.
pub fn render_report(report: &WeatherReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Json => format_json(report),
    }
}
