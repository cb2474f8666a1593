//! Simulated OCR provider
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use veriflow_core::data_model::{DocumentUpload, ExtractionResult};
use veriflow_core::error::VerifyError;
use veriflow_core::provider::OcrProvider;

/// Transcript every extraction returns, regardless of the uploaded file.
const SAMPLE_TRANSCRIPT: &str = "UNIVERSITY OF TECHNOLOGY
CERTIFICATE OF GRADUATION
This is to certify that
JOHN MICHAEL SMITH
has successfully completed the requirements
for the degree of
BACHELOR OF SCIENCE
in
COMPUTER SCIENCE
Date of Graduation: June 15, 2023
Certificate Number: UNIV2023-12345
[UNIVERSITY SEAL]
Registrar Signature
Dean Signature";

const SAMPLE_CONFIDENCE: f64 = 94.2;
const SAMPLE_PROCESSING_SECONDS: f64 = 2.8;

/// Returns the fixed graduation transcript after a simulated delay.
pub struct SimulatedOcr {
    latency: Duration,
}

impl SimulatedOcr {
    /// Provider with the demo latency of a real extraction pass
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(3000),
        }
    }

    /// Provider that answers immediately, for tests
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrProvider for SimulatedOcr {
    async fn extract(&self, upload: &DocumentUpload) -> Result<ExtractionResult, VerifyError> {
        tracing::debug!(file = %upload.file_name, "simulating OCR extraction");
        sleep(self.latency).await;

        Ok(ExtractionResult {
            extracted_text: SAMPLE_TRANSCRIPT.to_string(),
            confidence: SAMPLE_CONFIDENCE,
            processing_time: SAMPLE_PROCESSING_SECONDS,
        })
    }
}
