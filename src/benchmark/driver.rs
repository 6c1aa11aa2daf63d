//! Experiment driver - runs every strategy against every array size
//!
//! Sizes are processed in increasing order. For each size one array is
//! generated and handed, unmodified, to each strategy in turn. The driver
//! builds and returns the result set; rendering and file output belong to
//! the caller.

use tracing::{error, info, warn};

use crate::{
    constants::{ARRAY_SIZES, REPEATS},
    error::AppResult,
    models::{ResultSet, SizeRecord},
    selection::SelectionMethod,
};

use super::{
    generator::ArrayGenerator,
    progress::{NoopProgress, ProgressObserver},
    runner::run_n,
};

/// Drives the size × strategy cross product
pub struct ExperimentDriver {
    generator: ArrayGenerator,
    sizes: Vec<usize>,
    repeats: u32,
    methods: Vec<SelectionMethod>,
}

impl ExperimentDriver {
    /// Driver with the standard sizes, repeat count and all strategies
    pub fn new(generator: ArrayGenerator) -> Self {
        Self {
            generator,
            sizes: ARRAY_SIZES.to_vec(),
            repeats: REPEATS,
            methods: SelectionMethod::ALL.to_vec(),
        }
    }

    /// Replace the size list (library callers and tests)
    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Run the experiment without progress reporting
    pub fn run(&mut self) -> AppResult<ResultSet> {
        self.run_with_observer(&mut NoopProgress)
    }

    /// Run the experiment, notifying `observer` as it goes
    ///
    /// The first error aborts the remaining sizes: they only grow, so an
    /// allocation failure at one size will repeat at every larger one.
    pub fn run_with_observer(
        &mut self,
        observer: &mut dyn ProgressObserver,
    ) -> AppResult<ResultSet> {
        observer.experiment_started(&self.sizes, self.repeats);

        let sizes = self.sizes.clone();
        let mut result_set = ResultSet::default();

        for size in sizes {
            let record = self.run_size(size, observer).inspect_err(|e| {
                error!(size, code = e.error_code(), "Experiment aborted: {}", e);
                if e.is_resource_exhaustion() {
                    warn!(size, "Skipping this and all larger sizes");
                }
            })?;

            if !record.is_consistent() {
                let values: Vec<i32> = record.results.iter().map(|r| r.value).collect();
                warn!(size, ?values, "Strategies disagree on the selected value");
            }

            observer.size_completed(&record);
            result_set.records.push(record);
        }

        info!(records = result_set.len(), "Experiment finished");
        Ok(result_set)
    }

    fn run_size(
        &mut self,
        size: usize,
        observer: &mut dyn ProgressObserver,
    ) -> AppResult<SizeRecord> {
        let values = self.generator.generate(size)?;
        observer.array_generated(size);

        let mut results = Vec::with_capacity(self.methods.len());
        for &method in &self.methods {
            let result = run_n(method, &values, self.repeats)?;
            observer.strategy_completed(size, &result);
            results.push(result);
        }

        Ok(SizeRecord { size, results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::StrategyResult};

    #[derive(Default)]
    struct RecordingProgress {
        events: Vec<String>,
    }

    impl ProgressObserver for RecordingProgress {
        fn experiment_started(&mut self, sizes: &[usize], repeats: u32) {
            self.events.push(format!("start {} x{repeats}", sizes.len()));
        }

        fn array_generated(&mut self, size: usize) {
            self.events.push(format!("array {size}"));
        }

        fn strategy_completed(&mut self, size: usize, result: &StrategyResult) {
            self.events.push(format!("{} {size}", result.strategy));
        }

        fn size_completed(&mut self, record: &SizeRecord) {
            self.events.push(format!("done {}", record.size));
        }
    }

    #[test]
    fn test_defaults() {
        let driver = ExperimentDriver::new(ArrayGenerator::seeded(0));
        assert_eq!(
            driver.sizes,
            vec![10_000, 100_000, 1_000_000, 10_000_000, 100_000_000]
        );
        assert_eq!(driver.repeats, 3);
    }

    #[test]
    fn test_run_small_sizes() {
        let mut driver =
            ExperimentDriver::new(ArrayGenerator::seeded(5)).with_sizes(&[10, 1_000]);
        let result_set = driver.run().unwrap();

        assert_eq!(result_set.len(), 2);
        assert_eq!(result_set.records[0].size, 10);
        assert_eq!(result_set.records[1].size, 1_000);

        for record in &result_set.records {
            let names: Vec<&str> = record.results.iter().map(|r| r.strategy.as_str()).collect();
            assert_eq!(names, vec!["full_sort", "top_k", "six_pass"]);
            assert!(record.is_consistent());
            assert!(record.results.iter().all(|r| r.durations_ms.len() == 3));
        }
    }

    #[test]
    fn test_observer_sequence() {
        let mut driver = ExperimentDriver::new(ArrayGenerator::seeded(8)).with_sizes(&[20]);
        let mut progress = RecordingProgress::default();
        driver.run_with_observer(&mut progress).unwrap();

        assert_eq!(
            progress.events,
            vec![
                "start 1 x3",
                "array 20",
                "full_sort 20",
                "top_k 20",
                "six_pass 20",
                "done 20",
            ]
        );
    }

    #[test]
    fn test_abort_on_insufficient_input() {
        let mut driver =
            ExperimentDriver::new(ArrayGenerator::seeded(9)).with_sizes(&[10, 3, 100]);
        let mut progress = RecordingProgress::default();
        let err = driver.run_with_observer(&mut progress).unwrap_err();

        assert!(matches!(err, AppError::InsufficientInput { actual: 3, .. }));
        assert!(progress.events.contains(&"done 10".to_string()));
        assert!(!progress.events.iter().any(|e| e.ends_with("100")));
    }

    #[test]
    fn test_empty_size_list() {
        let mut driver = ExperimentDriver::new(ArrayGenerator::seeded(1)).with_sizes(&[]);
        assert!(driver.run().unwrap().is_empty());
    }
}
