//! Report rendering module.

mod text;

pub use text::render_text;

use crate::error::Result;
use crate::project::ProjectReport;

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &ProjectReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
