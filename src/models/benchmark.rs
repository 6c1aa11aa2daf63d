//! Benchmark result models

use serde::{Deserialize, Serialize};

/// Outcome of a single timed strategy call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Wall clock time in milliseconds
    pub duration_ms: f64,
    /// Value returned by the strategy
    pub value: i32,
}

/// Aggregated timings for one (size, strategy) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Strategy identifier
    pub strategy: String,
    /// One entry per repeat, in run order
    pub durations_ms: Vec<f64>,
    /// Arithmetic mean of `durations_ms`
    pub average_ms: f64,
    /// Value returned by the last repeat
    pub value: i32,
}

impl StrategyResult {
    /// Build a result from repeat measurements (must be non-empty)
    pub fn from_measurements(
        strategy: impl Into<String>,
        measurements: &[Measurement],
    ) -> Option<Self> {
        let last = measurements.last()?;

        let durations_ms: Vec<f64> = measurements.iter().map(|m| m.duration_ms).collect();
        let average_ms = durations_ms.iter().sum::<f64>() / durations_ms.len() as f64;

        Some(Self {
            strategy: strategy.into(),
            durations_ms,
            average_ms,
            value: last.value,
        })
    }

    pub fn fastest_ms(&self) -> f64 {
        self.durations_ms.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn slowest_ms(&self) -> f64 {
        self.durations_ms.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// All strategy results for one array size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub size: usize,
    pub results: Vec<StrategyResult>,
}

impl SizeRecord {
    /// True when every strategy selected the same value
    pub fn is_consistent(&self) -> bool {
        match self.results.first() {
            Some(first) => self.results.iter().all(|r| r.value == first.value),
            None => true,
        }
    }

    /// Strategy with the lowest average time
    pub fn fastest(&self) -> Option<&StrategyResult> {
        self.results
            .iter()
            .min_by(|a, b| a.average_ms.total_cmp(&b.average_ms))
    }
}

/// Ordered per-size records produced by one experiment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub records: Vec<SizeRecord>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(duration_ms: f64, value: i32) -> Measurement {
        Measurement { duration_ms, value }
    }

    #[test]
    fn test_from_measurements_averages() {
        let result = StrategyResult::from_measurements(
            "full_sort",
            &[measurement(1.0, 4), measurement(2.0, 4), measurement(6.0, 4)],
        )
        .unwrap();

        assert_eq!(result.strategy, "full_sort");
        assert_eq!(result.durations_ms, vec![1.0, 2.0, 6.0]);
        assert!((result.average_ms - 3.0).abs() < 1e-9);
        assert_eq!(result.value, 4);
        assert_eq!(result.fastest_ms(), 1.0);
        assert_eq!(result.slowest_ms(), 6.0);
    }

    #[test]
    fn test_from_measurements_empty() {
        assert!(StrategyResult::from_measurements("top_k", &[]).is_none());
    }

    #[test]
    fn test_size_record_consistency() {
        let a = StrategyResult::from_measurements("a", &[measurement(3.0, 7)]).unwrap();
        let b = StrategyResult::from_measurements("b", &[measurement(1.0, 7)]).unwrap();
        let c = StrategyResult::from_measurements("c", &[measurement(2.0, 8)]).unwrap();

        let consistent = SizeRecord {
            size: 10,
            results: vec![a.clone(), b.clone()],
        };
        assert!(consistent.is_consistent());
        assert_eq!(consistent.fastest().map(|r| r.strategy.as_str()), Some("b"));

        let inconsistent = SizeRecord {
            size: 10,
            results: vec![a, b, c],
        };
        assert!(!inconsistent.is_consistent());
    }
}
