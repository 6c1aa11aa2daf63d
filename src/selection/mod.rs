//! Selection strategies for the k-th largest value
//!
//! All strategies share one contract: given a slice with at least
//! [`RANK`](crate::constants::RANK) elements, return the value that would sit
//! at position `RANK` (1-indexed) after a descending sort. The caller's slice
//! is never modified; strategies that need scratch space allocate it
//! themselves and that allocation is part of their measured cost.

pub mod full_sort;
pub mod six_pass;
pub mod top_k;

use crate::{
    constants::RANK,
    error::{AppError, AppResult},
};

/// The three interchangeable strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMethod {
    /// Copy, sort descending, index
    FullSort,
    /// Stream through a bounded sorted buffer
    TopK,
    /// Extract the maximum six times from a scratch copy
    SixPass,
}

impl SelectionMethod {
    /// Every strategy, in report column order
    pub const ALL: [SelectionMethod; 3] = [Self::FullSort, Self::TopK, Self::SixPass];

    /// Stable identifier
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullSort => "full_sort",
            Self::TopK => "top_k",
            Self::SixPass => "six_pass",
        }
    }

    /// Human-readable column heading
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullSort => "Method 1: full sort",
            Self::TopK => "Method 2: top-6 buffer",
            Self::SixPass => "Method 3: six max passes",
        }
    }

    /// Select the 6th-largest value
    pub fn select(&self, values: &[i32]) -> AppResult<i32> {
        match self {
            Self::FullSort => full_sort::select(values),
            Self::TopK => top_k::select(values),
            Self::SixPass => six_pass::select(values),
        }
    }
}

impl std::fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject inputs too short to have a RANK-th element
pub(crate) fn ensure_rank(values: &[i32]) -> AppResult<()> {
    if values.len() < RANK {
        return Err(AppError::InsufficientInput {
            required: RANK,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Private copy of the input, failing instead of aborting on allocation failure
pub(crate) fn scratch_copy(values: &[i32]) -> AppResult<Vec<i32>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(values.len())
        .map_err(|_| AppError::OutOfMemory {
            elements: values.len(),
        })?;
    copy.extend_from_slice(values);
    Ok(copy)
}
