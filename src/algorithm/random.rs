use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, computation_error};

/// Seeded random source shared, in order, by the sampler and the annealer
///
/// All randomness in a generation run comes from one instance. Each method
/// consumes a fixed shape of draws so that upstream results never shift when
/// downstream code changes.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `count` independent indices weighted by `weights`, in one bulk pass
    ///
    /// # Errors
    ///
    /// Returns a computation error if the weights are empty, negative, or sum to zero
    pub fn categorical_draws(&mut self, weights: &[f64], count: usize) -> Result<Vec<usize>> {
        let distribution = WeightedIndex::new(weights)
            .map_err(|e| computation_error("categorical sampling", &e))?;
        Ok(distribution
            .sample_iter(&mut self.rng)
            .take(count)
            .collect())
    }

    /// Two distinct indices from `0..length`, chosen without replacement
    ///
    /// Returns `None` without consuming randomness when fewer than two indices exist.
    pub fn distinct_pair(&mut self, length: usize) -> Option<(usize, usize)> {
        if length < 2 {
            return None;
        }
        let picked = rand::seq::index::sample(&mut self.rng, length, 2);
        Some((picked.index(0), picked.index(1)))
    }

    /// Uniform value in `[0, 1)`
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
