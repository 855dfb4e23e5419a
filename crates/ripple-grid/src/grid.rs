//! Row-major dense 2D array of `f64`.

use std::ops::{Index, IndexMut};

/// A dense, row-major 2D array of `f64` values.
///
/// Cell `(i, j)` is row `i`, column `j`, stored at flat offset
/// `i * cols + j`. Shapes are fixed at construction; all grids in a
/// running engine are sized from a validated resolution, so the
/// constructors take non-zero dimensions as an invariant rather than
/// an error path.
///
/// # Examples
///
/// ```
/// use ripple_grid::Grid;
///
/// let mut g = Grid::filled(3, 3, 1.0);
/// g[(1, 1)] = 2.5;
/// assert_eq!(g[(1, 1)], 2.5);
/// assert_eq!(g.total(), 8.0 + 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Grid {
    /// Create a `rows × cols` grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Create a `rows × cols` grid of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// View of the underlying row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.cells.fill(value);
    }

    /// Sum over all cells. Applied to a height field this is the total
    /// mass of the column of water (up to the constant cell area).
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Whether any cell holds a NaN or infinity.
    ///
    /// The engine never raises on numerical blow-up; callers that care
    /// poll this after each step and choose their own policy.
    pub fn has_non_finite(&self) -> bool {
        self.cells.iter().any(|v| !v.is_finite())
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        i * self.cols + j
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.cells[self.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let off = self.offset(i, j);
        &mut self.cells[off]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn filled_sets_every_cell() {
        let g = Grid::filled(4, 3, 2.5);
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 3);
        assert!(g.as_slice().iter().all(|&v| v == 2.5));
    }

    #[test]
    fn indexing_is_row_major() {
        let mut g = Grid::zeros(2, 3);
        g[(0, 2)] = 1.0;
        g[(1, 0)] = 2.0;
        assert_eq!(g.as_slice(), &[0.0, 0.0, 1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_dimension_panics() {
        let _ = Grid::zeros(0, 3);
    }

    #[test]
    fn total_sums_all_cells() {
        let mut g = Grid::filled(2, 2, 1.0);
        g[(1, 1)] = 3.0;
        assert_eq!(g.total(), 6.0);
    }

    #[test]
    fn has_non_finite_detects_nan_and_inf() {
        let mut g = Grid::zeros(2, 2);
        assert!(!g.has_non_finite());
        g[(0, 1)] = f64::NAN;
        assert!(g.has_non_finite());
        g[(0, 1)] = f64::INFINITY;
        assert!(g.has_non_finite());
    }

    #[test]
    fn fill_overwrites() {
        let mut g = Grid::filled(3, 3, 7.0);
        g.fill(0.0);
        assert_eq!(g.total(), 0.0);
    }

    proptest! {
        #[test]
        fn shape_matches_construction(rows in 1usize..32, cols in 1usize..32) {
            let g = Grid::zeros(rows, cols);
            prop_assert_eq!(g.rows(), rows);
            prop_assert_eq!(g.cols(), cols);
            prop_assert_eq!(g.as_slice().len(), rows * cols);
        }

        #[test]
        fn roundtrip_write_read(
            rows in 1usize..16,
            cols in 1usize..16,
            value in -1e6f64..1e6,
        ) {
            let mut g = Grid::zeros(rows, cols);
            let (i, j) = (rows / 2, cols / 2);
            g[(i, j)] = value;
            prop_assert_eq!(g[(i, j)], value);
        }
    }
}
