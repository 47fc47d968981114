use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timing entry describing a single pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one pipeline run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Run `stage`, record its wall time under `label` and pass its value through.
    pub fn time<T>(&mut self, label: impl Into<String>, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = stage();
        self.push(label, start.elapsed().as_secs_f64() * 1000.0);
        value
    }
}
