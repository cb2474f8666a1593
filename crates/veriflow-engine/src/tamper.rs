//! Tamper Detector: alteration patterns between template and extracted text
//!
//! Rules run against the raw, unnormalized texts: the alterations they
//! look for (degree upgrades, year bumps, GPA edits) live in the exact
//! characters a forger changes, so case and punctuation matter here.
//!
//! Each rule is a discrete predicate; all rules are evaluated on every
//! call and findings are appended in rule order.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Numeric token following a GPA label, e.g. "GPA: 3.75"
    static ref GPA_TOKEN: Regex = Regex::new(r"(?i)GPA[:\s]*([\d.]+)").unwrap();
}

/// One detected suspicious discrepancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that fired
    pub rule_id: String,
    /// Human-readable description carried into the report
    pub description: String,
}

impl Finding {
    fn new(rule_id: &str, description: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            description: description.to_string(),
        }
    }
}

/// A single tamper rule.
enum TamperRule {
    /// Fires when the reference contains `original` and the candidate
    /// contains `altered` (exact, case-sensitive substrings).
    TokenSwap {
        id: &'static str,
        original: &'static str,
        altered: &'static str,
        finding: &'static str,
    },
    /// Fires when both texts carry a labeled numeric value and the two
    /// numeric strings differ. Comparison is literal: "3.50" and "3.5"
    /// are treated as a mismatch.
    LabeledNumberMismatch {
        id: &'static str,
        pattern: &'static Regex,
        finding: &'static str,
    },
}

impl TamperRule {
    fn evaluate(&self, reference: &str, candidate: &str) -> Option<Finding> {
        match self {
            TamperRule::TokenSwap {
                id,
                original,
                altered,
                finding,
            } => {
                if reference.contains(original) && candidate.contains(altered) {
                    Some(Finding::new(id, finding))
                } else {
                    None
                }
            }
            TamperRule::LabeledNumberMismatch { id, pattern, finding } => {
                let reference_value = extract_value(pattern, reference)?;
                let candidate_value = extract_value(pattern, candidate)?;
                if reference_value != candidate_value {
                    Some(Finding::new(id, finding))
                } else {
                    None
                }
            }
        }
    }
}

fn extract_value<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scans template text against extracted text for known alteration
/// patterns. The rule set is fixed.
pub struct TamperDetector {
    rules: Vec<TamperRule>,
}

impl TamperDetector {
    pub fn new() -> Self {
        Self {
            rules: vec![
                TamperRule::TokenSwap {
                    id: "degree_type_swap",
                    original: "BACHELOR",
                    altered: "MASTER",
                    finding: "Degree type appears to have been altered",
                },
                TamperRule::TokenSwap {
                    id: "graduation_year_swap",
                    original: "2023",
                    altered: "2024",
                    finding: "Graduation date may have been modified",
                },
                TamperRule::LabeledNumberMismatch {
                    id: "gpa_mismatch",
                    pattern: &GPA_TOKEN,
                    finding: "GPA value shows potential tampering",
                },
            ],
        }
    }

    /// Evaluate every rule, collecting findings in rule order.
    pub fn detect(&self, reference: &str, candidate: &str) -> Vec<Finding> {
        let findings: Vec<Finding> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(reference, candidate))
            .collect();

        if !findings.is_empty() {
            tracing::debug!(count = findings.len(), "tamper rules fired");
        }

        findings
    }
}

impl Default for TamperDetector {
    fn default() -> Self {
        Self::new()
    }
}
