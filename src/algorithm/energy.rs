use crate::catalog::Catalog;
use crate::io::configuration::{SPACE, TENSION_DECAY, TENSION_TOLERANCE};
use crate::spatial::{Coordinate, Direction, Grid};

/// Unpleasantness of `symbol` sitting at `at`, given the current grid around it
///
/// Walks outward in each of the four directions, adding decaying tension with
/// every symbol passed. A walk ends at the grid edge, once its weight drops
/// below the tolerance, or, for a space, at the first non-space symbol.
/// The cell at `at` itself is never read, so the symbol may be hypothetical.
pub fn energy(grid: &Grid, catalog: &Catalog, symbol: char, at: Coordinate) -> f64 {
    let starts_on_space = symbol == SPACE;
    let dimensions = grid.dimensions();
    let mut total = 0.0;

    for direction in Direction::ALL {
        let mut position = at;
        let mut weight = 1.0;

        while weight >= TENSION_TOLERANCE {
            let Some(next) = position.step(direction, dimensions) else {
                break;
            };
            position = next;

            let Some(other) = grid.get(position) else {
                break;
            };
            if starts_on_space && other != SPACE {
                break;
            }

            total += catalog.tension(symbol, other) * weight;
            weight *= TENSION_DECAY;
        }
    }

    total
}

/// Energy of whatever symbol currently occupies `at`
pub fn site_energy(grid: &Grid, catalog: &Catalog, at: Coordinate) -> f64 {
    grid.get(at)
        .map_or(0.0, |symbol| energy(grid, catalog, symbol, at))
}

/// Sum of site energies over the whole grid
pub fn total_energy(grid: &Grid, catalog: &Catalog) -> f64 {
    let cols = grid.cols();
    (0..grid.len())
        .map(|index| site_energy(grid, catalog, Coordinate::from_index(index, cols)))
        .sum()
}

/// Energies of the symbols at `a` and `b` before and after exchanging them
///
/// Both sides are evaluated against the unchanged grid, so each symbol sees
/// its own neighbourhood as if only it had moved.
pub fn swap_energies(grid: &Grid, catalog: &Catalog, a: Coordinate, b: Coordinate) -> (f64, f64) {
    let (Some(first), Some(second)) = (grid.get(a), grid.get(b)) else {
        return (0.0, 0.0);
    };

    let before = energy(grid, catalog, first, a) + energy(grid, catalog, second, b);
    let after = energy(grid, catalog, first, b) + energy(grid, catalog, second, a);
    (before, after)
}
