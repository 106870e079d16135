//! Text output built on annealed textures

/// Header compositor that centers text lines inside the texture
pub mod header;

pub use header::{HeaderCompositor, render_header};
