//! Reproducible sampling for held-out evaluation

use crate::{MathError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split `n` row indices into shuffled (train, test) sets.
///
/// The shuffle is driven by a seeded [`StdRng`], so the same `n`, `test_ratio`
/// and `seed` always produce the same split. The test set receives
/// `round(n * test_ratio)` rows.
pub fn seeded_split_indices(
    n: usize,
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if n < 2 {
        return Err(MathError::InsufficientData(
            "Need at least two rows to split into train and test sets".to_string(),
        ));
    }
    if test_ratio <= 0.0 || test_ratio >= 1.0 {
        return Err(MathError::InvalidInput(
            "Test ratio must be between 0 and 1".to_string(),
        ));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_size = ((n as f64 * test_ratio).round() as usize).clamp(1, n - 1);
    let test = indices.split_off(n - test_size);

    Ok((indices, test))
}
