//! Summary template loading
//!
//! Templates ship embedded in the crate as YAML; deployments can load a
//! replacement file with the same shape.

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, SummaryTemplate>,
}

/// A single named template
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryTemplate {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse templates YAML: {}", e))
    }

    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file: {}", e))?;
        Self::from_yaml(&content)
    }

    pub fn get(&self, name: &str) -> Option<&SummaryTemplate> {
        self.templates.get(name)
    }

    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}
