//! Input/output operations, configuration constants and error handling

/// Command-line parsing and command dispatch
pub mod cli;
/// Tunable constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress for annealing runs
pub mod progress;
