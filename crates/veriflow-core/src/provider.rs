//! Collaborator traits: OCR provider and validation authority
//!
//! Both collaborators may take real time (network, processing); the traits
//! are async and object-safe so the workflow can hold them boxed.

use crate::data_model::{DocumentUpload, ExtractionResult, ValidationResult};
use crate::error::VerifyError;
use async_trait::async_trait;

/// Produces an OCR transcript from an uploaded document.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    async fn extract(&self, upload: &DocumentUpload) -> Result<ExtractionResult, VerifyError>;
}

/// Answers authoritative checks on certificate identity fields.
#[async_trait]
pub trait ValidationAuthority: Send + Sync {
    async fn validate(&self, certificate_id: &str) -> Result<ValidationResult, VerifyError>;
}
