//! Domain models

pub mod benchmark;

pub use benchmark::{Measurement, ResultSet, SizeRecord, StrategyResult};
