use crate::algorithm::random::RandomSource;
use crate::io::error::{Result, SnowError, computation_error};
use crate::math::probability::ProbabilityTable;
use crate::spatial::grid::{Grid, validate_dimensions};

/// Fill a `rows x cols` grid with independent draws from `table`
///
/// Every cell is drawn in a single bulk call, row-major, before any other
/// consumer touches `rng`.
///
/// # Errors
///
/// Returns [`SnowError::InvalidDimensions`] for a zero or overflowing size, or a
/// computation error if the table cannot be sampled.
pub fn sample_grid(
    table: &ProbabilityTable,
    rows: usize,
    cols: usize,
    rng: &mut RandomSource,
) -> Result<Grid> {
    validate_dimensions(rows, cols)?;
    let cell_count = rows
        .checked_mul(cols)
        .ok_or(SnowError::InvalidDimensions { rows, cols })?;

    let symbols = table.symbols();
    let draws = rng.categorical_draws(&table.weights(), cell_count)?;

    let cells = draws
        .into_iter()
        .map(|index| {
            symbols.get(index).copied().ok_or_else(|| {
                computation_error(
                    "categorical sampling",
                    &format!("drew index {index} from {} symbols", symbols.len()),
                )
            })
        })
        .collect::<Result<Vec<char>>>()?;

    Grid::from_symbols(rows, cols, cells)
}
