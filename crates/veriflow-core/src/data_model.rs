//! Data Model: Template, ExtractionResult, ValidationResult, VerificationReport
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference record for a known certificate type.
///
/// Defined once at process start and read-only thereafter; the registry
/// hands out clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Template ID (ex: "UNIV-TEMPLATE-001")
    pub id: String,
    /// Display name
    pub name: String,
    /// Canonical text used as the comparison baseline
    pub canonical_text: String,
    /// Owning institution
    pub institution: String,
    /// Field markers that must appear in a filled-in certificate
    pub required_fields: Vec<String>,
}

/// An uploaded document handed to the OCR provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn named(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: Vec::new(),
        }
    }
}

/// Output of one OCR extraction attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Text recovered from the document
    pub extracted_text: String,
    /// Extraction confidence, 0-100
    pub confidence: f64,
    /// Elapsed processing time in seconds
    pub processing_time: f64,
}

/// Answer from the external validation authority.
///
/// The engine treats this record as opaque input; its shape is the
/// authority's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub certificate_exists: bool,
    pub student_details_match: bool,
    pub issue_date_verified: bool,
    pub institution_verified: bool,
    pub certificate_id: String,
    pub student_name: String,
    pub institution_name: String,
}

/// Text-level analysis carried inside the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub extracted_text: String,
    /// Template match score, 0-100, rounded to one decimal
    pub template_match_score: f64,
    /// Human-readable descriptions of detected alterations
    pub suspicious_changes: Vec<String>,
}

/// Final decision for one verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    Valid,
    Invalid,
    Suspicious,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerificationStatus::Valid => write!(f, "Valid"),
            VerificationStatus::Invalid => write!(f, "Invalid"),
            VerificationStatus::Suspicious => write!(f, "Suspicious"),
        }
    }
}

/// The single artifact a verification run produces.
///
/// Immutable after creation; serialization is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub certificate_id: String,
    pub student_name: String,
    pub institution_name: String,
    /// Similarity between template and extracted text, 0-100, one decimal
    pub ocr_similarity: f64,
    pub api_validation: ValidationResult,
    pub text_analysis: TextAnalysis,
    pub final_status: VerificationStatus,
    pub verification_timestamp: DateTime<Utc>,
    /// OCR processing time in seconds, copied from the extraction
    pub processing_time: f64,
}
