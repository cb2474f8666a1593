//! Template Registry
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use veriflow_core::data_model::Template;

/// Canonical text of the sample university-degree template. Bracketed
/// markers stand in for the per-certificate fields.
const SAMPLE_TEMPLATE_TEXT: &str = "UNIVERSITY OF TECHNOLOGY
CERTIFICATE OF GRADUATION
This is to certify that
[STUDENT_NAME]
has successfully completed the requirements
for the degree of
[DEGREE_TYPE]
in
[FIELD_OF_STUDY]
Date of Graduation: [GRADUATION_DATE]
Certificate Number: [CERTIFICATE_NUMBER]
[UNIVERSITY_SEAL]
Registrar Signature
Dean Signature";

/// The template every demo verification runs against.
pub fn sample_template() -> Template {
    Template {
        id: "UNIV-TEMPLATE-001".to_string(),
        name: "University Degree Template".to_string(),
        canonical_text: SAMPLE_TEMPLATE_TEXT.to_string(),
        institution: "University of Technology".to_string(),
        required_fields: vec![
            "STUDENT_NAME".to_string(),
            "DEGREE_TYPE".to_string(),
            "FIELD_OF_STUDY".to_string(),
            "GRADUATION_DATE".to_string(),
            "CERTIFICATE_NUMBER".to_string(),
        ],
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the sample template
    pub fn with_samples() -> Self {
        let mut registry = Self::new();
        registry.register(sample_template());
        registry
    }

    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn template_ids(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
