//! Benchmark execution engine
//!
//! The engine is a straight-line batch pipeline:
//!
//! 1. **Generator** (`generator.rs`): one random array per size
//! 2. **Harness** (`runner.rs`): times each strategy call and repeats it
//! 3. **Driver** (`driver.rs`): the size × strategy cross product
//!
//! Progress can be observed through [`ProgressObserver`], but nothing in the
//! engine requires an observer.

pub mod driver;
pub mod generator;
pub mod metrics;
pub mod progress;
pub mod runner;

pub use driver::ExperimentDriver;
pub use generator::ArrayGenerator;
pub use metrics::SampleCollector;
pub use progress::{NoopProgress, ProgressObserver, TracingProgress};
pub use runner::{measure_once, run_n};
