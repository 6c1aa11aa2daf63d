//! Sixth-largest selection benchmark
//!
//! Compares three ways of finding the 6th-largest value in large arrays of
//! `i32` and produces a structured result set that can be rendered as an
//! HTML report.
//!
//! # Strategies
//!
//! - **Full sort**: copy, sort descending, index
//! - **Top-k buffer**: one streaming pass over a fixed six-slot buffer
//! - **Six passes**: extract the maximum six times from a scratch copy
//!
//! # Architecture
//!
//! - **Selection**: the strategies, behind [`SelectionMethod`]
//! - **Benchmark**: generator, timing harness and experiment driver
//! - **Models**: result set types
//! - **Report**: HTML and JSON output

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod report;
pub mod selection;
pub mod utils;

// Re-export commonly used types
pub use benchmark::{ArrayGenerator, ExperimentDriver};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::ResultSet;
pub use selection::SelectionMethod;
