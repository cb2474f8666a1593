//! Veriflow Engine: the certificate verification decision core
//!
//! Takes a reference template text, an OCR extraction, and an external
//! validation answer; produces a similarity score, a list of suspicious
//! changes, and the final verification report.
//!
//! # Example
//!
//! ```ignore
//! use veriflow_engine::DecisionEngine;
//!
//! let engine = DecisionEngine::new();
//! let report = engine.assess(&template.canonical_text, &extraction, &validation);
//! println!("{}: {:.1}%", report.final_status, report.ocr_similarity);
//! ```

pub mod normalizer;
pub mod report;
pub mod similarity;
pub mod tamper;

pub use normalizer::normalize;
pub use similarity::{FixedNoise, NoNoise, NoiseSource, SeededNoise, SimilarityScorer, UniformNoise};
pub use tamper::{Finding, TamperDetector};

use veriflow_core::data_model::{ExtractionResult, ValidationResult, VerificationReport};

/// Scorer and detector behind one seam.
///
/// The workflow layer calls `score`, `detect`, and `report::generate`
/// separately so it can report stage progress; `assess` runs all three
/// for callers that only want the verdict.
pub struct DecisionEngine {
    scorer: SimilarityScorer,
    detector: TamperDetector,
}

impl DecisionEngine {
    /// Engine with live measurement noise
    pub fn new() -> Self {
        Self {
            scorer: SimilarityScorer::new(),
            detector: TamperDetector::new(),
        }
    }

    /// Engine with zero noise, for repeatable results
    pub fn deterministic() -> Self {
        Self {
            scorer: SimilarityScorer::deterministic(),
            detector: TamperDetector::new(),
        }
    }

    pub fn with_noise(noise: Box<dyn NoiseSource>) -> Self {
        Self {
            scorer: SimilarityScorer::with_noise(noise),
            detector: TamperDetector::new(),
        }
    }

    /// Similarity between the reference text and a candidate, in [0, 100]
    pub fn score(&self, reference: &str, candidate: &str) -> f64 {
        self.scorer.score(reference, candidate)
    }

    /// Alteration findings between the raw reference and candidate texts
    pub fn detect(&self, reference: &str, candidate: &str) -> Vec<Finding> {
        self.detector.detect(reference, candidate)
    }

    /// Run the full decision: score, detect, and generate the report.
    pub fn assess(
        &self,
        reference: &str,
        extraction: &ExtractionResult,
        validation: &ValidationResult,
    ) -> VerificationReport {
        let similarity = self.score(reference, &extraction.extracted_text);
        let findings = self.detect(reference, &extraction.extracted_text);
        report::generate(extraction, similarity, validation, &findings)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriflow_core::data_model::VerificationStatus;

    fn validation_all_true() -> ValidationResult {
        ValidationResult {
            certificate_exists: true,
            student_details_match: true,
            issue_date_verified: true,
            institution_verified: true,
            certificate_id: "UNIV2023-12345".to_string(),
            student_name: "John Michael Smith".to_string(),
            institution_name: "University of Technology".to_string(),
        }
    }

    #[test]
    fn test_assess_identical_texts() {
        let engine = DecisionEngine::deterministic();
        let extraction = ExtractionResult {
            extracted_text: "This is to certify that JOHN MICHAEL SMITH".to_string(),
            confidence: 94.2,
            processing_time: 2.8,
        };

        // Same text up to case and punctuation
        let report = engine.assess(
            "this is to certify that john michael smith.",
            &extraction,
            &validation_all_true(),
        );

        assert_eq!(report.ocr_similarity, 100.0);
        assert_eq!(report.final_status, VerificationStatus::Valid);
    }

    #[test]
    fn test_assess_tampered_text_is_suspicious() {
        let engine = DecisionEngine::deterministic();
        let extraction = ExtractionResult {
            extracted_text: "degree of MASTER OF SCIENCE, June 2024".to_string(),
            confidence: 94.2,
            processing_time: 2.8,
        };

        let report = engine.assess(
            "degree of BACHELOR OF SCIENCE, June 2023",
            &extraction,
            &validation_all_true(),
        );

        assert_eq!(report.final_status, VerificationStatus::Suspicious);
        assert_eq!(report.text_analysis.suspicious_changes.len(), 2);
    }
}
