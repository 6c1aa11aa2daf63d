//! Sample array generation
//!
//! Each generator owns its random source, so experiments never share hidden
//! global state and a seeded generator reproduces the same arrays.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    constants::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE},
    error::{AppError, AppResult},
};

/// Uniform integer array generator
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `n` values drawn from the default closed range
    pub fn generate(&mut self, n: usize) -> AppResult<Vec<i32>> {
        self.generate_in_range(n, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE)
    }

    /// `n` values drawn uniformly, with replacement, from `[min, max]`
    pub fn generate_in_range(&mut self, n: usize, min: i32, max: i32) -> AppResult<Vec<i32>> {
        if max < min {
            return Err(AppError::InvalidRange { min, max });
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(n)
            .map_err(|_| AppError::OutOfMemory { elements: n })?;

        values.extend((0..n).map(|_| self.rng.random_range(min..=max)));
        Ok(values)
    }
}
