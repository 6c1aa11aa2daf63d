//! Six-pass maximum extraction: O(RANK·n) time, one full copy

use crate::{
    constants::{RANK, SENTINEL},
    error::AppResult,
};

use super::{ensure_rank, scratch_copy};

/// Index of the first occurrence of the maximum (slice must be non-empty)
#[inline]
fn first_max_index(values: &[i32]) -> usize {
    let mut best_idx = 0;
    let mut best = values[0];
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    best_idx
}

/// Extract the maximum RANK times, consuming each winner with the sentinel
pub fn select(values: &[i32]) -> AppResult<i32> {
    ensure_rank(values)?;

    let mut scratch = scratch_copy(values)?;
    let mut result = SENTINEL;

    for _ in 0..RANK {
        let idx = first_max_index(&scratch);
        result = scratch[idx];
        scratch[idx] = SENTINEL;
    }

    Ok(result)
}
