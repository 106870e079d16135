//! Tests for the tension-walk energy on hand-built grids

#[cfg(test)]
mod tests {
    use snowdrift::algorithm::energy::{energy, site_energy, swap_energies, total_energy};
    use snowdrift::catalog::Catalog;
    use snowdrift::spatial::{Coordinate, Grid};

    fn catalog() -> Catalog {
        Catalog::standard().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    // Tests tension decays with distance along a row
    // Verified by not multiplying the weight after each step
    #[test]
    fn test_identical_symbol_two_cells_away() {
        let grid = Grid::from_rows(&["*.*"]).unwrap();

        let e = energy(&grid, &catalog(), '*', Coordinate::new(0, 0));

        assert!(close(e, 0.8), "energy {e}");
    }

    // Tests vertical walks use same-category tension
    // Verified by only walking along rows
    #[test]
    fn test_vertical_walk() {
        let grid = Grid::from_rows(&["*", "+", "*"]).unwrap();

        let e = energy(&grid, &catalog(), '*', Coordinate::new(0, 0));

        assert!(close(e, 0.7 + 0.8), "energy {e}");
    }

    // Tests a space keeps walking through spaces and stops at the first flake
    // Verified by adding a contribution for the flake before stopping
    #[test]
    fn test_space_stops_at_flake() {
        let grid = Grid::from_rows(&["  * "]).unwrap();

        let e = energy(&grid, &catalog(), ' ', Coordinate::new(0, 0));

        assert!(close(e, -0.1), "energy {e}");
        assert!(close(
            energy(&grid, &catalog(), ' ', Coordinate::new(0, 3)),
            0.0
        ));
    }

    // Tests flakes keep walking past spaces
    // Verified by applying the space stop rule to every symbol
    #[test]
    fn test_flake_walks_past_space() {
        let grid = Grid::from_rows(&["* *"]).unwrap();

        let e = energy(&grid, &catalog(), '*', Coordinate::new(0, 0));

        assert!(close(e, 0.8), "energy {e}");
    }

    // Tests long walks stop once the weight drops below the tolerance
    // Verified by walking to the grid edge
    #[test]
    fn test_walk_stops_at_tolerance() {
        let row = "*".repeat(60);
        let grid = Grid::from_rows(&[row.as_str()]).unwrap();

        let e = energy(&grid, &catalog(), '*', Coordinate::new(0, 0));
        // 31 terms: 0.8^30 is above 0.001, 0.8^31 is below
        let expected = (1.0 - 0.8_f64.powi(31)) / (1.0 - 0.8);

        assert!((e - expected).abs() < 1e-9, "energy {e}, expected {expected}");
    }

    // Tests the evaluated cell itself is never read
    // Verified by starting the walk at the evaluated cell
    #[test]
    fn test_hypothetical_symbol() {
        let grid = Grid::from_rows(&["*."]).unwrap();

        let e = energy(&grid, &catalog(), '.', Coordinate::new(0, 0));

        assert!(close(e, 1.0), "energy {e}");
        assert!(close(
            site_energy(&grid, &catalog(), Coordinate::new(0, 0)),
            0.0
        ));
    }

    // Tests swap energies evaluate each symbol in the other's place on the unchanged grid
    // Verified by swapping the grid before evaluating
    #[test]
    fn test_swap_energies() {
        let grid = Grid::from_rows(&["*.*"]).unwrap();

        let (before, after) =
            swap_energies(&grid, &catalog(), Coordinate::new(0, 0), Coordinate::new(0, 1));

        assert!(close(before, 0.8), "before {before}");
        assert!(close(after, 3.0), "after {after}");
    }

    // Tests total energy is the sum of site energies
    // Verified by skipping the last row
    #[test]
    fn test_total_energy() {
        let catalog = catalog();
        let grid = Grid::from_rows(&["*. ", " +*"]).unwrap();

        let mut sum = 0.0;
        for row in 0..2 {
            for col in 0..3 {
                sum += site_energy(&grid, &catalog, Coordinate::new(row, col));
            }
        }

        assert!(close(total_energy(&grid, &catalog), sum));
    }
}
