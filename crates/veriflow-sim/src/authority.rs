//! Simulated validation authority
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use veriflow_core::data_model::ValidationResult;
use veriflow_core::error::VerifyError;
use veriflow_core::provider::ValidationAuthority;

const REGISTERED_CERTIFICATE_ID: &str = "UNIV2023-12345";
const REGISTERED_STUDENT_NAME: &str = "John Michael Smith";
const REGISTERED_INSTITUTION: &str = "University of Technology";

/// Answers positively with a configurable probability.
///
/// The three record checks (existence, student match, issue date) share
/// one draw; the institution check always passes, mirroring an authority
/// that recognizes the issuing school even for unknown certificates.
pub struct SimulatedAuthority {
    latency: Duration,
    validity_rate: f64,
}

impl SimulatedAuthority {
    /// Authority with the demo latency and an 80% positive rate
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(2000),
            validity_rate: 0.8,
        }
    }

    /// Immediate all-positive answers, for tests
    pub fn always_valid() -> Self {
        Self {
            latency: Duration::ZERO,
            validity_rate: 1.0,
        }
    }

    /// Immediate all-negative answers, for tests
    pub fn never_valid() -> Self {
        Self {
            latency: Duration::ZERO,
            validity_rate: 0.0,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_validity_rate(mut self, rate: f64) -> Self {
        self.validity_rate = rate.clamp(0.0, 1.0);
        self
    }
}

impl Default for SimulatedAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ValidationAuthority for SimulatedAuthority {
    async fn validate(&self, certificate_id: &str) -> Result<ValidationResult, VerifyError> {
        tracing::debug!(certificate_id, "simulating authority lookup");
        sleep(self.latency).await;

        let is_valid = rand::thread_rng().gen::<f64>() < self.validity_rate;

        Ok(ValidationResult {
            certificate_exists: is_valid,
            student_details_match: is_valid,
            issue_date_verified: is_valid,
            institution_verified: true,
            certificate_id: REGISTERED_CERTIFICATE_ID.to_string(),
            student_name: REGISTERED_STUDENT_NAME.to_string(),
            institution_name: REGISTERED_INSTITUTION.to_string(),
        })
    }
}
