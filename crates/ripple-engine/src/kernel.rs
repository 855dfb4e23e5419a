//! Precomputed Gaussian drop kernel.

use ripple_grid::Grid;
use std::ops::Index;

/// A 2D Gaussian bump sampled once at construction, added into the
/// height field (scaled) whenever a drop is injected.
///
/// For a width parameter `w` the kernel has side `w - 1`. Sample
/// positions along each axis start at `-1` with spacing `2 / (w - 1)`,
/// and the value at `(i, j)` is `peak * exp(-5 * (x_i² + x_j²))`.
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DropKernel {
    cells: Grid,
}

impl DropKernel {
    /// Sample the kernel for the given peak height and width.
    ///
    /// The width must already be validated (`2 <= width <= n`); this
    /// type does not re-check grid fit.
    pub fn new(peak: f64, width: usize) -> Self {
        debug_assert!(width >= 2);
        let side = width - 1;
        let spacing = 2.0 / (width - 1) as f64;
        let mut cells = Grid::zeros(side, side);
        for i in 0..side {
            let x = -1.0 + i as f64 * spacing;
            for j in 0..side {
                let y = -1.0 + j as f64 * spacing;
                cells[(i, j)] = peak * (-5.0 * (x * x + y * y)).exp();
            }
        }
        Self { cells }
    }

    /// Kernel side length (`width - 1`).
    #[inline]
    pub fn side(&self) -> usize {
        self.cells.rows()
    }

    /// Sum of all kernel cells. A drop of scale `s` raises total grid
    /// mass by exactly `s * total()`.
    pub fn total(&self) -> f64 {
        self.cells.total()
    }
}

impl Index<(usize, usize)> for DropKernel {
    type Output = f64;

    #[inline]
    fn index(&self, at: (usize, usize)) -> &f64 {
        &self.cells[at]
    }
}
