//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("OCR/{0}")]
    OcrError(String),

    #[error("AUTHORITY/{0}")]
    AuthorityError(String),

    #[error("TEMPLATE/{0}")]
    TemplateError(String),

    #[error("RENDER/{0}")]
    RenderError(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),

    #[error("CONTRACT/{0}")]
    ContractViolation(String),
}
