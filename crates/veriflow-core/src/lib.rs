//! Veriflow Core: Data Model, Collaborator Traits, and Stage Events
//!
//! Shared vocabulary for the certificate verification pipeline.

pub mod data_model;
pub mod error;
pub mod events;
pub mod provider;

pub use data_model::{
    DocumentUpload, ExtractionResult, Template, TextAnalysis, ValidationResult,
    VerificationReport, VerificationStatus,
};
pub use error::VerifyError;
pub use events::{ProgressObserver, StageEvent, StageId, StageUpdate};
pub use provider::{OcrProvider, ValidationAuthority};

/// Version of the Veriflow engine
pub const VERIFLOW_VERSION: &str = "1.0.0";
