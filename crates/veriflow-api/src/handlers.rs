//! API Handlers
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use veriflow_core::data_model::DocumentUpload;
use veriflow_core::VERIFLOW_VERSION;
use veriflow_engine::DecisionEngine;
use veriflow_out::ReportEnvelope;
use veriflow_sim::{SimulatedAuthority, SimulatedOcr};
use veriflow_workflow::{TracingObserver, VerificationWorkflow};

use crate::AppState;

/// Template used when a request names none
const DEFAULT_TEMPLATE_ID: &str = "UNIV-TEMPLATE-001";

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Name of the uploaded document
    pub file_name: String,
    /// Template to compare against; defaults to the sample template
    #[serde(default)]
    pub template_id: Option<String>,
}

/// Run one verification against the simulated collaborators and return
/// the export envelope.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VerifyRequest>,
) -> (StatusCode, Json<Value>) {
    let template_id = payload.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID);
    let Some(template) = state.registry.get(template_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown template: {}", template_id) })),
        );
    };

    let workflow = VerificationWorkflow::with_engine(
        Box::new(SimulatedOcr::new()),
        Box::new(SimulatedAuthority::new()),
        DecisionEngine::new(),
    );

    let upload = DocumentUpload::named(payload.file_name);
    match workflow.run(template, &upload, &TracingObserver).await {
        Ok(report) => {
            state
                .metrics
                .record_verification(&report.final_status.to_string());

            let envelope = ReportEnvelope::new(report);
            match serde_json::to_value(&envelope) {
                Ok(value) => (StatusCode::OK, Json(value)),
                Err(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                ),
            }
        }
        Err(err) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

pub async fn list_templates(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "templates": state.registry.template_ids() })),
    )
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": VERIFLOW_VERSION })),
    )
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    match state.metrics.encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}
