//! Symbol catalog: which symbols exist, which category owns each, and how
//! strongly same-category symbols repel each other

/// Category definitions and validated catalog construction
pub mod symbols;

pub use symbols::{Catalog, Category};
