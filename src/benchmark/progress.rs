//! Progress notifications for long-running experiments
//!
//! Observers are optional: the driver works the same with [`NoopProgress`].

use tracing::info;

use crate::{
    models::{SizeRecord, StrategyResult},
    utils::format::{format_count, format_milliseconds},
};

/// Hooks fired by the experiment driver
pub trait ProgressObserver {
    fn experiment_started(&mut self, _sizes: &[usize], _repeats: u32) {}

    fn array_generated(&mut self, _size: usize) {}

    fn strategy_completed(&mut self, _size: usize, _result: &StrategyResult) {}

    fn size_completed(&mut self, _record: &SizeRecord) {}
}

/// Ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// Reports progress through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn experiment_started(&mut self, sizes: &[usize], repeats: u32) {
        info!(
            sizes = sizes.len(),
            repeats,
            "=== Starting selection benchmark ==="
        );
    }

    fn array_generated(&mut self, size: usize) {
        info!("Generated array of {} elements, running strategies", format_count(size));
    }

    fn strategy_completed(&mut self, size: usize, result: &StrategyResult) {
        info!(
            strategy = %result.strategy,
            value = result.value,
            "{} done for {}: avg {}",
            result.strategy,
            format_count(size),
            format_milliseconds(result.average_ms)
        );
    }

    fn size_completed(&mut self, record: &SizeRecord) {
        if let Some(fastest) = record.fastest() {
            info!(
                consistent = record.is_consistent(),
                "Size {} finished, fastest: {}",
                format_count(record.size),
                fastest.strategy
            );
        }
    }
}
