//! Prometheus counters for the verification endpoints.
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Registry plus the counters the handlers update.
pub struct ApiMetrics {
    registry: Registry,
    verifications: IntCounterVec,
}

impl ApiMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let verifications = IntCounterVec::new(
            Opts::new("veriflow_verifications_total", "Verification runs by final status"),
            &["status"],
        )
        .expect("counter definition");
        registry
            .register(Box::new(verifications.clone()))
            .expect("counter registration");

        Self {
            registry,
            verifications,
        }
    }

    /// Count one finished verification run
    pub fn record_verification(&self, status: &str) {
        self.verifications.with_label_values(&[status]).inc();
    }

    /// Encode the registry in Prometheus text format
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}
