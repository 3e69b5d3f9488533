//! Uniform random selection for the random-pick endpoints.
//!
//! Each call draws independently with no memory of previous picks;
//! consecutive requests may return the same row.

use rand::Rng;

/// Pick one row uniformly at random, or `None` from an empty table.
pub fn random_item<T>(rows: &[T]) -> Option<&T> {
    random_item_with(&mut rand::rng(), rows)
}

/// Pick one row uniformly at random using a caller-supplied generator.
///
/// Tests pass a seeded [`rand::rngs::SmallRng`] so distribution checks
/// are reproducible.
pub fn random_item_with<'a, T, R: Rng>(rng: &mut R, rows: &'a [T]) -> Option<&'a T> {
    if rows.is_empty() {
        return None;
    }

    let index = rng.random_range(0..rows.len());
    rows.get(index)
}
