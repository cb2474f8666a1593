//! Progress observers
use std::sync::Mutex;
use veriflow_core::events::{ProgressObserver, StageEvent, StageUpdate};

/// Logs every stage event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_event(&self, event: &StageEvent) {
        match &event.update {
            StageUpdate::Started => {
                tracing::info!(run_id = %event.run_id, stage = event.stage.title(), "stage started");
            }
            StageUpdate::Completed { latency_ms } => {
                tracing::info!(
                    run_id = %event.run_id,
                    stage = event.stage.title(),
                    latency_ms,
                    "stage completed"
                );
            }
            StageUpdate::Failed { reason } => {
                tracing::warn!(
                    run_id = %event.run_id,
                    stage = event.stage.title(),
                    reason,
                    "stage failed"
                );
            }
        }
    }
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_event(&self, _event: &StageEvent) {}
}

/// Records events for later inspection. Test support.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    events: Mutex<Vec<StageEvent>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StageEvent> {
        self.events.lock().expect("observer lock poisoned").clone()
    }
}

impl ProgressObserver for CollectingObserver {
    fn on_event(&self, event: &StageEvent) {
        self.events
            .lock()
            .expect("observer lock poisoned")
            .push(event.clone());
    }
}
