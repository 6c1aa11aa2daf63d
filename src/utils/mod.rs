//! Utility functions

pub mod format;

pub use format::{format_count, format_milliseconds, format_samples};
