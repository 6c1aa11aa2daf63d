//! Full sort strategy: O(n log n) time, one full copy

use crate::{constants::RANK, error::AppResult};

use super::{ensure_rank, scratch_copy};

/// Sort a copy in descending order and read the RANK-th slot
pub fn select(values: &[i32]) -> AppResult<i32> {
    ensure_rank(values)?;

    let mut sorted = scratch_copy(values)?;
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    Ok(sorted[RANK - 1])
}
