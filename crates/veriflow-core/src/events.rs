//! Stage Events: progress reporting for the verification pipeline
//!
//! The workflow layer emits one `Started` and one terminal `Completed` or
//! `Failed` update per stage. Observers must not block.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four stages of a verification run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Ocr,
    TemplateComparison,
    AuthorityValidation,
    Report,
}

impl StageId {
    /// Display title for progress surfaces
    pub fn title(&self) -> &'static str {
        match self {
            StageId::Ocr => "OCR Text Extraction",
            StageId::TemplateComparison => "Template Comparison",
            StageId::AuthorityValidation => "Database Validation",
            StageId::Report => "Generate Report",
        }
    }

    /// One-line description of what the stage does
    pub fn description(&self) -> &'static str {
        match self {
            StageId::Ocr => "Extract text content from the uploaded document",
            StageId::TemplateComparison => "Compare against the original certificate template",
            StageId::AuthorityValidation => "Verify with the education authority registry",
            StageId::Report => "Compile the verification results",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StageUpdate {
    Started,
    Completed { latency_ms: u64 },
    Failed { reason: String },
}

/// One progress event emitted by the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageEvent {
    /// Identifies the verification run the event belongs to
    pub run_id: Uuid,
    pub stage: StageId,
    pub update: StageUpdate,
}

impl StageEvent {
    pub fn started(run_id: Uuid, stage: StageId) -> Self {
        Self {
            run_id,
            stage,
            update: StageUpdate::Started,
        }
    }

    pub fn completed(run_id: Uuid, stage: StageId, latency_ms: u64) -> Self {
        Self {
            run_id,
            stage,
            update: StageUpdate::Completed { latency_ms },
        }
    }

    pub fn failed(run_id: Uuid, stage: StageId, reason: impl Into<String>) -> Self {
        Self {
            run_id,
            stage,
            update: StageUpdate::Failed {
                reason: reason.into(),
            },
        }
    }
}

/// Receives stage events as the workflow advances.
pub trait ProgressObserver: Send + Sync {
    fn on_event(&self, event: &StageEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_titles() {
        assert_eq!(StageId::Ocr.title(), "OCR Text Extraction");
        assert_eq!(StageId::Report.title(), "Generate Report");
        assert!(StageId::AuthorityValidation
            .description()
            .contains("authority"));
    }

    #[test]
    fn test_event_serialization() {
        let event = StageEvent::completed(Uuid::new_v4(), StageId::TemplateComparison, 42);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("template_comparison"));
        assert!(json.contains("completed"));
        assert!(json.contains("42"));
    }
}
