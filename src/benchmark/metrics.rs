//! Timing sample collection

use crate::models::{Measurement, StrategyResult};

/// Collects the measurements of repeated runs of one strategy
pub struct SampleCollector {
    strategy: String,
    measurements: Vec<Measurement>,
}

impl SampleCollector {
    /// Create a new collector for `strategy`
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            measurements: Vec::new(),
        }
    }

    /// Add a measurement
    pub fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Value of the first measurement, if any
    pub fn first_value(&self) -> Option<i32> {
        self.measurements.first().map(|m| m.value)
    }

    /// Aggregate the collected runs
    pub fn calculate_results(&self) -> Option<StrategyResult> {
        StrategyResult::from_measurements(self.strategy.clone(), &self.measurements)
    }
}
