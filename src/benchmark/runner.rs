//! Benchmark harness - times strategy calls and aggregates repeats

use std::hint::black_box;
use std::time::Instant;

use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{Measurement, StrategyResult},
    selection::SelectionMethod,
};

use super::metrics::SampleCollector;

/// Time a single strategy call
///
/// Only the call itself is inside the timing window; any copy the strategy
/// makes of its input is part of its own cost.
pub fn measure_once(method: SelectionMethod, values: &[i32]) -> AppResult<Measurement> {
    let start = Instant::now();
    let value = black_box(method.select(black_box(values)))?;
    let elapsed = start.elapsed();

    Ok(Measurement {
        duration_ms: elapsed.as_secs_f64() * 1000.0,
        value,
    })
}

/// Run a strategy `repeats` times on the same input and aggregate
///
/// The first failing run aborts the whole call. Every repeat must return the
/// same value as the first one.
pub fn run_n(method: SelectionMethod, values: &[i32], repeats: u32) -> AppResult<StrategyResult> {
    if repeats == 0 {
        return Err(AppError::InvalidRepeats);
    }

    let mut collector = SampleCollector::new(method.name());

    for repeat in 0..repeats {
        let measurement = measure_once(method, values)?;
        debug!(
            strategy = method.name(),
            repeat,
            duration_ms = measurement.duration_ms,
            value = measurement.value,
            "run finished"
        );

        if let Some(expected) = collector.first_value() {
            if measurement.value != expected {
                return Err(AppError::InconsistentResult {
                    strategy: method.name().to_string(),
                    repeat,
                    expected,
                    actual: measurement.value,
                });
            }
        }

        collector.add(measurement);
    }

    collector
        .calculate_results()
        .ok_or(AppError::InvalidRepeats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [i32; 10] = [5, 3, 9, 1, 7, 2, 8, 4, 6, 0];

    #[test]
    fn test_measure_once() {
        let measurement = measure_once(SelectionMethod::TopK, &KNOWN).unwrap();
        assert_eq!(measurement.value, 4);
        assert!(measurement.duration_ms >= 0.0);
    }

    #[test]
    fn test_run_n_three_repeats() {
        for method in SelectionMethod::ALL {
            let result = run_n(method, &KNOWN, 3).unwrap();
            assert_eq!(result.strategy, method.name());
            assert_eq!(result.durations_ms.len(), 3);
            assert_eq!(result.value, 4);

            let mean = result.durations_ms.iter().sum::<f64>() / 3.0;
            assert!((result.average_ms - mean).abs() < 1e-12);
        }
    }

    #[test]
    fn test_run_n_zero_repeats() {
        assert!(matches!(
            run_n(SelectionMethod::FullSort, &KNOWN, 0),
            Err(AppError::InvalidRepeats)
        ));
    }

    #[test]
    fn test_run_n_propagates_errors() {
        let err = run_n(SelectionMethod::SixPass, &[1, 2, 3], 3).unwrap_err();
        assert!(matches!(err, AppError::InsufficientInput { actual: 3, .. }));
    }

    #[test]
    fn test_run_n_leaves_input_untouched() {
        let values = KNOWN.to_vec();
        for method in SelectionMethod::ALL {
            run_n(method, &values, 3).unwrap();
        }
        assert_eq!(values, KNOWN);
    }
}
