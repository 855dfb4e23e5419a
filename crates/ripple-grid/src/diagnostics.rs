//! Caller-facing field diagnostics.
//!
//! The scheme is known to be non-conservative with growing total
//! variation; an exact solution of the conservation law would keep it
//! constant. `tv` is therefore useful as a quality/instability
//! indicator, tracked by the driver rather than enforced by the engine.

use crate::grid::Grid;

/// Total variation of a field: the sum of absolute forward differences
/// in both directions over all cells that have a forward neighbour.
///
/// # Examples
///
/// ```
/// use ripple_grid::{total_variation, Grid};
///
/// let flat = Grid::filled(4, 4, 1.0);
/// assert_eq!(total_variation(&flat), 0.0);
///
/// let mut bump = Grid::zeros(3, 3);
/// bump[(1, 1)] = 1.0;
/// // Four unit edges in each direction touch the bump.
/// assert_eq!(total_variation(&bump), 4.0);
/// ```
pub fn total_variation(field: &Grid) -> f64 {
    let mut tv = 0.0;
    for i in 0..field.rows() {
        for j in 0..field.cols() {
            let here = field[(i, j)];
            if i + 1 < field.rows() {
                tv += (field[(i + 1, j)] - here).abs();
            }
            if j + 1 < field.cols() {
                tv += (field[(i, j + 1)] - here).abs();
            }
        }
    }
    tv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_field_has_zero_variation() {
        assert_eq!(total_variation(&Grid::filled(8, 8, 3.5)), 0.0);
    }

    #[test]
    fn single_cell_field_has_zero_variation() {
        assert_eq!(total_variation(&Grid::filled(1, 1, 42.0)), 0.0);
    }

    #[test]
    fn step_in_one_direction() {
        // Two columns at 0, one at 1: each of the 3 rows crosses the
        // step once.
        let mut g = Grid::zeros(3, 3);
        for i in 0..3 {
            g[(i, 2)] = 1.0;
        }
        assert_eq!(total_variation(&g), 3.0);
    }

    #[test]
    fn variation_is_translation_invariant() {
        let mut a = Grid::zeros(4, 4);
        a[(1, 1)] = 2.0;
        let mut b = Grid::filled(4, 4, 10.0);
        b[(1, 1)] = 12.0;
        assert_eq!(total_variation(&a), total_variation(&b));
    }
}
