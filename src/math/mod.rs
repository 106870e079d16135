//! Mathematical utilities for sampling and acceptance decisions

/// Frequency resolution and per-symbol probability tables
pub mod probability;

/// Metropolis acceptance weight for a move that changes energy by `delta`
///
/// Defined as zero for non-positive temperatures, so that only strict
/// improvements are ever taken there.
pub fn boltzmann_factor(delta: f64, temperature: f64) -> f64 {
    if temperature > 0.0 {
        (-delta / temperature).exp()
    } else {
        0.0
    }
}
