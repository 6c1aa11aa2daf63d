//! Application-wide constants
//!
//! The experiment shape (sizes, repeats, rank) is fixed here rather than
//! exposed as configuration.

// =============================================================================
// SELECTION
// =============================================================================

/// Rank being selected (1-indexed position in descending order)
pub const RANK: usize = 6;

/// Marks slots already consumed by the six-pass strategy
pub const SENTINEL: i32 = i32::MIN;

// =============================================================================
// GENERATOR DEFAULTS
// =============================================================================

/// Lower bound (inclusive) of generated values
pub const DEFAULT_MIN_VALUE: i32 = -10_000;

/// Upper bound (inclusive) of generated values
pub const DEFAULT_MAX_VALUE: i32 = 10_000;

// =============================================================================
// EXPERIMENT
// =============================================================================

/// Array sizes benchmarked, in increasing order
pub const ARRAY_SIZES: &[usize] = &[10_000, 100_000, 1_000_000, 10_000_000, 100_000_000];

/// Timed runs per (size, strategy) pair
pub const REPEATS: u32 = 3;

// =============================================================================
// REPORT DEFAULTS
// =============================================================================

/// Default HTML report location
pub const DEFAULT_REPORT_PATH: &str = "results.html";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
