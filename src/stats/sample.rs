use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Seeded sampling
// ---------------------------------------------------------------------------

/// Number of records drawn for the sample batch.
pub const SAMPLE_SIZE: usize = 29;

/// Fixed seed so repeated runs select the same records.
pub const SAMPLE_SEED: u64 = 42;

/// Draw `n` records uniformly without replacement using a generator seeded
/// with `seed`. Deterministic for a given input ordering and seed.
///
/// Fails loudly with [`AnalysisError::InsufficientData`] when the input
/// holds fewer than `n` records; it never truncates the draw.
pub fn draw_sample<T: Clone>(records: &[T], n: usize, seed: u64) -> Result<Vec<T>, AnalysisError> {
    if records.len() < n {
        return Err(AnalysisError::InsufficientData {
            needed: n,
            found: records.len(),
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let indices = rand::seq::index::sample(&mut rng, records.len(), n);
    Ok(indices.iter().map(|i| records[i].clone()).collect())
}
