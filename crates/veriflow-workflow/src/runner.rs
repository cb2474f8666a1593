//! Workflow runner: drives collaborators and engine through the stages
use std::time::Instant;
use uuid::Uuid;
use veriflow_core::data_model::{DocumentUpload, Template, VerificationReport};
use veriflow_core::error::VerifyError;
use veriflow_core::events::{ProgressObserver, StageEvent, StageId};
use veriflow_core::provider::{OcrProvider, ValidationAuthority};
use veriflow_engine::{report, DecisionEngine};

/// Label preceding the certificate number in extracted text.
const CERTIFICATE_NUMBER_LABEL: &str = "Certificate Number:";

/// Pull the certificate number out of an extracted transcript.
///
/// Returns the first value following the `Certificate Number:` label, or
/// `None` when the transcript carries no recognizable number.
pub fn certificate_number(text: &str) -> Option<&str> {
    text.lines().find_map(|line| {
        let rest = line.trim().strip_prefix(CERTIFICATE_NUMBER_LABEL)?;
        let value = rest.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// One-shot verification pipeline.
///
/// Holds the collaborators boxed so callers can swap simulated and real
/// implementations without touching the sequencing.
pub struct VerificationWorkflow {
    ocr: Box<dyn OcrProvider>,
    authority: Box<dyn ValidationAuthority>,
    engine: DecisionEngine,
}

impl VerificationWorkflow {
    pub fn new(ocr: Box<dyn OcrProvider>, authority: Box<dyn ValidationAuthority>) -> Self {
        Self {
            ocr,
            authority,
            engine: DecisionEngine::new(),
        }
    }

    pub fn with_engine(
        ocr: Box<dyn OcrProvider>,
        authority: Box<dyn ValidationAuthority>,
        engine: DecisionEngine,
    ) -> Self {
        Self {
            ocr,
            authority,
            engine,
        }
    }

    /// Run the four stages against one uploaded document.
    ///
    /// Extraction completes before scoring; scoring and validation run
    /// before report generation. A failing collaborator emits a `Failed`
    /// event for its stage and aborts the run.
    pub async fn run(
        &self,
        template: &Template,
        upload: &DocumentUpload,
        observer: &dyn ProgressObserver,
    ) -> Result<VerificationReport, VerifyError> {
        let run_id = Uuid::new_v4();
        tracing::info!(
            %run_id,
            template = %template.id,
            file = %upload.file_name,
            "verification run started"
        );

        // Stage 1: OCR extraction
        observer.on_event(&StageEvent::started(run_id, StageId::Ocr));
        let started = Instant::now();
        let extraction = match self.ocr.extract(upload).await {
            Ok(extraction) => extraction,
            Err(err) => {
                observer.on_event(&StageEvent::failed(run_id, StageId::Ocr, err.to_string()));
                return Err(err);
            }
        };
        observer.on_event(&StageEvent::completed(
            run_id,
            StageId::Ocr,
            started.elapsed().as_millis() as u64,
        ));

        // Stage 2: template comparison
        observer.on_event(&StageEvent::started(run_id, StageId::TemplateComparison));
        let started = Instant::now();
        let similarity = self
            .engine
            .score(&template.canonical_text, &extraction.extracted_text);
        observer.on_event(&StageEvent::completed(
            run_id,
            StageId::TemplateComparison,
            started.elapsed().as_millis() as u64,
        ));

        // Stage 3: authority validation
        observer.on_event(&StageEvent::started(run_id, StageId::AuthorityValidation));
        let started = Instant::now();
        let certificate_id = certificate_number(&extraction.extracted_text).unwrap_or_default();
        let validation = match self.authority.validate(certificate_id).await {
            Ok(validation) => validation,
            Err(err) => {
                observer.on_event(&StageEvent::failed(
                    run_id,
                    StageId::AuthorityValidation,
                    err.to_string(),
                ));
                return Err(err);
            }
        };
        observer.on_event(&StageEvent::completed(
            run_id,
            StageId::AuthorityValidation,
            started.elapsed().as_millis() as u64,
        ));

        // Stage 4: tamper scan and report generation
        observer.on_event(&StageEvent::started(run_id, StageId::Report));
        let started = Instant::now();
        let findings = self
            .engine
            .detect(&template.canonical_text, &extraction.extracted_text);
        let verification_report = report::generate(&extraction, similarity, &validation, &findings);
        observer.on_event(&StageEvent::completed(
            run_id,
            StageId::Report,
            started.elapsed().as_millis() as u64,
        ));

        tracing::info!(
            %run_id,
            status = %verification_report.final_status,
            similarity = verification_report.ocr_similarity,
            "verification run finished"
        );

        Ok(verification_report)
    }
}
