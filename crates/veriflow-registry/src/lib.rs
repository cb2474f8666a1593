//! Template Registry
//!
//! In-memory store of certificate templates, seeded with the sample
//! university-degree template used by the demo workflow.

pub mod template_registry;

pub use template_registry::{sample_template, TemplateRegistry};
