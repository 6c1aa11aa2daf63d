//! Custom error types and handling
//!
//! Every fallible operation in the crate returns [`AppResult`]. Errors are
//! raised synchronously and never replaced by fallback values.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Generator errors
    #[error("Invalid range: max ({max}) is less than min ({min})")]
    InvalidRange { min: i32, max: i32 },

    // Selection errors
    #[error("Insufficient input: need at least {required} elements, got {actual}")]
    InsufficientInput { required: usize, actual: usize },

    #[error("Out of memory while allocating {elements} elements")]
    OutOfMemory { elements: usize },

    // Harness errors
    #[error("Repeat count must be at least 1")]
    InvalidRepeats,

    #[error("Strategy {strategy} returned {actual} on repeat {repeat}, expected {expected}")]
    InconsistentResult {
        strategy: String,
        repeat: u32,
        expected: i32,
        actual: i32,
    },

    // Output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::InsufficientInput { .. } => "INSUFFICIENT_INPUT",
            Self::OutOfMemory { .. } => "OUT_OF_MEMORY",
            Self::InvalidRepeats => "INVALID_REPEATS",
            Self::InconsistentResult { .. } => "INCONSISTENT_RESULT",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether running larger sizes after this error is pointless
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
