/// Simulated annealing over pairwise symbol swaps
pub mod annealing;
/// Tension-walk energy of symbols on the grid
pub mod energy;
/// Seeded random source with fixed draw shapes
pub mod random;
/// Initial categorical grid population
pub mod sampler;
/// Descending temperature schedules
pub mod schedule;
/// End-to-end texture generation
pub mod texture;
