//! Report Generator: aggregates scores and findings into the final verdict
use crate::tamper::Finding;
use chrono::Utc;
use veriflow_core::data_model::{
    ExtractionResult, TextAnalysis, ValidationResult, VerificationReport, VerificationStatus,
};

/// Round to one decimal place, half away from zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Four-way average of the verification signals, each term in [0, 100].
pub fn overall_score(similarity: f64, extraction: &ExtractionResult, validation: &ValidationResult) -> f64 {
    let existence = if validation.certificate_exists { 100.0 } else { 0.0 };
    let details = if validation.student_details_match { 100.0 } else { 0.0 };
    (similarity + extraction.confidence + existence + details) / 4.0
}

/// Ordered status derivation; the first matching rule wins.
///
/// Any finding forces `Suspicious` regardless of score.
pub fn derive_status(
    findings: &[Finding],
    overall: f64,
    validation: &ValidationResult,
) -> VerificationStatus {
    if !findings.is_empty() {
        VerificationStatus::Suspicious
    } else if overall >= 80.0 && validation.certificate_exists {
        VerificationStatus::Valid
    } else {
        VerificationStatus::Invalid
    }
}

/// Build the report for one verification run.
///
/// Total over well-formed inputs. The similarity value is clamped to
/// [0, 100] and rounded to one decimal for both the top-level field and
/// the nested match score; the timestamp is captured here, in UTC.
pub fn generate(
    extraction: &ExtractionResult,
    similarity: f64,
    validation: &ValidationResult,
    findings: &[Finding],
) -> VerificationReport {
    let similarity = similarity.clamp(0.0, 100.0);
    let overall = overall_score(similarity, extraction, validation);
    let final_status = derive_status(findings, overall, validation);
    let rounded = round_tenths(similarity);

    tracing::debug!(
        similarity = rounded,
        overall,
        findings = findings.len(),
        status = %final_status,
        "report generated"
    );

    VerificationReport {
        certificate_id: validation.certificate_id.clone(),
        student_name: validation.student_name.clone(),
        institution_name: validation.institution_name.clone(),
        ocr_similarity: rounded,
        api_validation: validation.clone(),
        text_analysis: TextAnalysis {
            extracted_text: extraction.extracted_text.clone(),
            template_match_score: rounded,
            suspicious_changes: findings.iter().map(|f| f.description.clone()).collect(),
        },
        final_status,
        verification_timestamp: Utc::now(),
        processing_time: extraction.processing_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction(confidence: f64) -> ExtractionResult {
        ExtractionResult {
            extracted_text: "CERTIFICATE OF GRADUATION".to_string(),
            confidence,
            processing_time: 2.8,
        }
    }

    fn validation(exists: bool, details: bool) -> ValidationResult {
        ValidationResult {
            certificate_exists: exists,
            student_details_match: details,
            issue_date_verified: exists,
            institution_verified: true,
            certificate_id: "UNIV2023-12345".to_string(),
            student_name: "John Michael Smith".to_string(),
            institution_name: "University of Technology".to_string(),
        }
    }

    fn finding() -> Finding {
        Finding {
            rule_id: "degree_type_swap".to_string(),
            description: "Degree type appears to have been altered".to_string(),
        }
    }

    #[test]
    fn test_overall_score_averages_four_terms() {
        let overall = overall_score(90.0, &extraction(94.2), &validation(true, true));
        assert!((overall - (90.0 + 94.2 + 100.0 + 100.0) / 4.0).abs() < 1e-9);

        let overall = overall_score(90.0, &extraction(94.2), &validation(false, false));
        assert!((overall - (90.0 + 94.2) / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_findings_override_perfect_scores() {
        let report = generate(
            &extraction(100.0),
            100.0,
            &validation(true, true),
            &[finding()],
        );
        assert_eq!(report.final_status, VerificationStatus::Suspicious);
        assert_eq!(report.text_analysis.suspicious_changes.len(), 1);
    }

    #[test]
    fn test_valid_above_threshold() {
        // (70 + 70 + 100 + 100) / 4 = 85
        let report = generate(&extraction(70.0), 70.0, &validation(true, true), &[]);
        assert_eq!(report.final_status, VerificationStatus::Valid);
        assert!(report.text_analysis.suspicious_changes.is_empty());
    }

    #[test]
    fn test_invalid_below_threshold() {
        // (50 + 50 + 100 + 0) / 4 = 50
        let report = generate(&extraction(50.0), 50.0, &validation(true, false), &[]);
        assert_eq!(report.final_status, VerificationStatus::Invalid);
    }

    #[test]
    fn test_high_score_without_existence_is_invalid() {
        // (100 + 100 + 0 + 100) / 4 = 75, and existence is required anyway
        let report = generate(&extraction(100.0), 100.0, &validation(false, true), &[]);
        assert_eq!(report.final_status, VerificationStatus::Invalid);
    }

    #[test]
    fn test_similarity_rounding() {
        let report = generate(&extraction(90.0), 87.34, &validation(true, true), &[]);
        assert_eq!(report.ocr_similarity, 87.3);
        assert_eq!(report.text_analysis.template_match_score, 87.3);

        let report = generate(&extraction(90.0), 87.36, &validation(true, true), &[]);
        assert_eq!(report.ocr_similarity, 87.4);
        assert_eq!(report.text_analysis.template_match_score, 87.4);
    }

    #[test]
    fn test_similarity_clamped() {
        let report = generate(&extraction(90.0), 104.2, &validation(true, true), &[]);
        assert_eq!(report.ocr_similarity, 100.0);

        let report = generate(&extraction(90.0), -3.0, &validation(true, true), &[]);
        assert_eq!(report.ocr_similarity, 0.0);
    }

    #[test]
    fn test_identity_fields_copied_from_validation() {
        let report = generate(&extraction(90.0), 95.0, &validation(true, true), &[]);
        assert_eq!(report.certificate_id, "UNIV2023-12345");
        assert_eq!(report.student_name, "John Michael Smith");
        assert_eq!(report.institution_name, "University of Technology");
        assert_eq!(report.processing_time, 2.8);
    }
}
