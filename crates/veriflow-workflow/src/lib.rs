//! Veriflow Workflow: sequencing for one verification run
//!
//! Drives the collaborators and the decision engine in order:
//!
//! ```text
//! Upload → OCR → Template Comparison → Authority Validation → Report
//!           ↓            ↓                     ↓                 ↓
//!       Extraction   Similarity          ValidationResult    Verdict
//! ```
//!
//! Each stage emits a `Started` and a terminal `Completed`/`Failed`
//! event to the caller's observer, decoupled from the engine's
//! synchronous calls.

pub mod progress;
pub mod runner;

pub use progress::{CollectingObserver, NullObserver, TracingObserver};
pub use runner::VerificationWorkflow;
