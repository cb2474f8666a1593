//! Export envelope for verification reports
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use veriflow_core::data_model::VerificationReport;

/// Version stamped on every exported report
pub const REPORT_VERSION: &str = "1.0";

/// System identifier carried in exports
pub const VERIFICATION_SYSTEM: &str = "Certificate Verification System v2.0";

/// A report wrapped for export: the report fields at the top level plus
/// generation metadata, matching the downloadable-report shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEnvelope {
    #[serde(flatten)]
    pub report: VerificationReport,
    pub generated_at: DateTime<Utc>,
    pub report_version: String,
    pub verification_system: String,
}

impl ReportEnvelope {
    pub fn new(report: VerificationReport) -> Self {
        Self {
            report,
            generated_at: Utc::now(),
            report_version: REPORT_VERSION.to_string(),
            verification_system: VERIFICATION_SYSTEM.to_string(),
        }
    }

    /// Suggested download file name
    pub fn file_name(&self) -> String {
        format!("verification-report-{}.json", self.report.certificate_id)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
