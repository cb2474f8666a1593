//! Veriflow Out: report export and rendering
//!
//! Wraps a `VerificationReport` in the versioned download envelope and
//! renders human-readable summaries through Handlebars templates.
//!
//! # Example
//!
//! ```ignore
//! use veriflow_out::{render_summary, ReportEnvelope};
//!
//! let envelope = ReportEnvelope::new(report);
//! let json = envelope.to_pretty_json()?;
//! let text = render_summary(&envelope)?;
//! ```

pub mod envelope;
pub mod renderer;
pub mod templates;

pub use envelope::{ReportEnvelope, REPORT_VERSION, VERIFICATION_SYSTEM};
pub use renderer::SummaryRenderer;
pub use templates::TemplatesFile;

use lazy_static::lazy_static;
use thiserror::Error;

/// Templates embedded in the crate
pub const DEFAULT_TEMPLATES_YAML: &str = include_str!("../templates/report-summary.yaml");

lazy_static! {
    static ref DEFAULT_TEMPLATES: TemplatesFile =
        TemplatesFile::from_yaml(DEFAULT_TEMPLATES_YAML).expect("embedded templates parse");
}

/// Errors that can occur while exporting a report
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a replacement templates file from disk.
pub fn load_templates(path: &str) -> Result<TemplatesFile, RenderError> {
    TemplatesFile::load(path).map_err(RenderError::Template)
}

/// Render the plain-text summary for an exported report.
pub fn render_summary(envelope: &ReportEnvelope) -> Result<String, RenderError> {
    render_named(envelope, "summary")
}

/// Render the one-line status message for an exported report.
pub fn render_status_line(envelope: &ReportEnvelope) -> Result<String, RenderError> {
    render_named(envelope, "status_line")
}

fn render_named(envelope: &ReportEnvelope, template_name: &str) -> Result<String, RenderError> {
    let renderer = SummaryRenderer::new(DEFAULT_TEMPLATES.clone());
    let data = serde_json::to_value(envelope)?;
    renderer
        .render(template_name, &data)
        .map_err(RenderError::Render)
}
