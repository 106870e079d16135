//! Spatial data structures
//!
//! This module contains the symbol grid along with the coordinate and
//! direction types used to walk it.

/// Grid storage, coordinates and directions
pub mod grid;

pub use grid::{Coordinate, Direction, Grid};
