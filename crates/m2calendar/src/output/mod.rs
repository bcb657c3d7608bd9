//! Output formatting functions.

pub mod json;
pub mod pretty;

use m2calendar_core::calendar::Projection;

use crate::cli::OutputFormat;

/// Format a projection for output: JSON, or the text rendering of its view.
pub fn format_projection(projection: &Projection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(projection),
        OutputFormat::Pretty => pretty::format_projection(projection),
    }
}
