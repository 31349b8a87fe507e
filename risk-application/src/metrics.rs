use std::sync::atomic::{AtomicU64, Ordering};

use risk_domain::RiskLevel;

#[derive(Debug, Default)]
pub struct Metrics {
    assessments_low: AtomicU64,
    assessments_medium: AtomicU64,
    assessments_high: AtomicU64,
    invalid_inputs: AtomicU64,
    batches: AtomicU64,
    registry_updates: AtomicU64,
}

impl Metrics {
    pub fn record_assessment(&self, level: RiskLevel) {
        let counter = match level {
            RiskLevel::Low => &self.assessments_low,
            RiskLevel::Medium => &self.assessments_medium,
            RiskLevel::High => &self.assessments_high,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_input(&self) {
        self.invalid_inputs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_batch(&self) {
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_registry_update(&self) {
        self.registry_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn assessments_total(&self) -> u64 {
        self.assessments_low.load(Ordering::Relaxed)
            + self.assessments_medium.load(Ordering::Relaxed)
            + self.assessments_high.load(Ordering::Relaxed)
    }

    pub fn invalid_inputs_total(&self) -> u64 {
        self.invalid_inputs.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let low = self.assessments_low.load(Ordering::Relaxed);
        let medium = self.assessments_medium.load(Ordering::Relaxed);
        let high = self.assessments_high.load(Ordering::Relaxed);
        let invalid = self.invalid_inputs.load(Ordering::Relaxed);
        let batches = self.batches.load(Ordering::Relaxed);
        let updates = self.registry_updates.load(Ordering::Relaxed);

        format!(
            "# TYPE risk_assessments_total counter\n\
risk_assessments_total{{level=\"LOW\"}} {}\n\
risk_assessments_total{{level=\"MEDIUM\"}} {}\n\
risk_assessments_total{{level=\"HIGH\"}} {}\n\
# TYPE risk_invalid_input_total counter\n\
risk_invalid_input_total {}\n\
# TYPE risk_batches_total counter\n\
risk_batches_total {}\n\
# TYPE risk_registry_updates_total counter\n\
risk_registry_updates_total {}\n",
            low, medium, high, invalid, batches, updates
        )
    }
}
