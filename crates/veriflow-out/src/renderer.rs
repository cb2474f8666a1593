//! Handlebars rendering for report summaries
use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

use crate::templates::TemplatesFile;

handlebars_helper!(score: |v: f64| format!("{:.1}%", v));

/// Compiled renderer with the score helper registered
pub struct SummaryRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

impl<'a> SummaryRenderer<'a> {
    /// Create a renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_helper("score", Box::new(score));

        for (name, template) in &templates.templates {
            let _ = handlebars.register_template_string(name, &template.template);
        }

        SummaryRenderer {
            handlebars,
            templates,
        }
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("Render error: {}", e))
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}
