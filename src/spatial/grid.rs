//! Fixed-size symbol grid with coordinate stepping
//!
//! The grid never changes shape after construction. Its contents only move
//! through pairwise swaps, and text stamping by the header compositor.

use std::collections::BTreeMap;

use ndarray::Array2;

use crate::io::error::{Result, SnowError, computation_error};

/// A cell position, `row` in `0..rows` and `col` in `0..cols`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major coordinate of flat index `index` in a grid `cols` wide
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Neighbouring coordinate one step along `direction`, if it stays inside `dimensions`
    pub fn step(self, direction: Direction, dimensions: (usize, usize)) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < dimensions.0 && col < dimensions.1).then_some(Self { row, col })
    }
}

/// Axis-aligned walking directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing row
    Down,
    /// Decreasing row
    Up,
    /// Increasing column
    Right,
    /// Decreasing column
    Left,
}

impl Direction {
    /// All four directions in evaluation order
    pub const ALL: [Self; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];

    /// (row, col) offset of a single step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
        }
    }
}

/// Two-dimensional array of symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    /// Lay out `symbols` row-major into a `rows x cols` grid
    ///
    /// # Errors
    ///
    /// Returns [`SnowError::InvalidDimensions`] if either dimension is zero, or a
    /// computation error if the symbol count does not match the shape.
    pub fn from_symbols(rows: usize, cols: usize, symbols: Vec<char>) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        let cells = Array2::from_shape_vec((rows, cols), symbols)
            .map_err(|e| computation_error("grid layout", &e))?;
        Ok(Self { cells })
    }

    /// Build a grid from equal-length text rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row is empty, or the rows differ in length
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.chars().count());
        let mut symbols = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let before = symbols.len();
            symbols.extend(row.chars());
            if symbols.len() - before != cols {
                return Err(computation_error(
                    "grid layout",
                    &format!("row {row:?} is not {cols} symbols wide"),
                ));
            }
        }
        Self::from_symbols(rows.len(), cols, symbols)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells, which validated grids never are
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol at `at`, if inside the grid
    pub fn get(&self, at: Coordinate) -> Option<char> {
        self.cells.get([at.row, at.col]).copied()
    }

    /// Overwrite the symbol at `at`, returning whether it was inside the grid
    pub fn set(&mut self, at: Coordinate, symbol: char) -> bool {
        self.cells
            .get_mut([at.row, at.col])
            .map(|cell| *cell = symbol)
            .is_some()
    }

    /// Exchange the symbols at two coordinates
    pub fn swap(&mut self, a: Coordinate, b: Coordinate) {
        self.cells.swap([a.row, a.col], [b.row, b.col]);
    }

    /// Row `row` as a string
    pub fn row_string(&self, row: usize) -> String {
        if row >= self.rows() {
            return String::new();
        }
        self.cells.row(row).iter().collect()
    }

    /// All rows as strings
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows()).map(|r| self.row_string(r)).collect()
    }

    /// Occurrence count of each symbol
    pub fn symbol_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &symbol in &self.cells {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

/// Reject grids with a zero dimension
///
/// # Errors
///
/// Returns [`SnowError::InvalidDimensions`] if `rows` or `cols` is zero
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(SnowError::InvalidDimensions { rows, cols });
    }
    Ok(())
}
