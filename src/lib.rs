//! Annealed ASCII snow textures for puzzle solution headers
//!
//! Symbols are drawn from a weighted categorical distribution to fill a grid,
//! then rearranged by simulated annealing so that visually heavy symbols do
//! not clump together. The header compositor centers text inside the result.

#![forbid(unsafe_code)]

/// Texture sampling, energy evaluation and annealing
pub mod algorithm;
/// Symbol categories and tension weights
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Probability tables and acceptance math
pub mod math;
/// Text composition over annealed textures
pub mod render;
/// Grid storage and coordinates
pub mod spatial;

pub use algorithm::texture::generate_texture;
pub use io::error::{Result, SnowError};
pub use render::render_header;
