//! Primary and staggered state for the shallow-water scheme.

use crate::grid::Grid;

/// The primary conserved state: height and the two momentum components.
///
/// All three grids are `(n+2) × (n+2)`: the interior `1..=n` plus one
/// ghost layer on each side. Ghost cells are rewritten from the
/// adjacent interior row/column by the boundary phase every step and
/// are never independently mutated.
///
/// Created once at engine construction (`h ≡ 1`, `u ≡ v ≡ 0`) and
/// mutated in place for the life of the simulation.
#[derive(Clone, Debug)]
pub struct PrimaryState {
    /// Water height.
    pub h: Grid,
    /// x-momentum.
    pub u: Grid,
    /// y-momentum.
    pub v: Grid,
    n: usize,
}

impl PrimaryState {
    /// Create the quiescent initial state for interior resolution `n`:
    /// unit height, zero momentum.
    pub fn quiescent(n: usize) -> Self {
        let side = n + 2;
        Self {
            h: Grid::filled(side, side, 1.0),
            u: Grid::zeros(side, side),
            v: Grid::zeros(side, side),
            n,
        }
    }

    /// Interior resolution (cells per side, excluding ghost layers).
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Side length of the stored grids (`n + 2`).
    #[inline]
    pub fn side(&self) -> usize {
        self.n + 2
    }
}

/// One staggered stage buffer triple, `(n+1) × (n+1)`.
///
/// Holds quantities interpolated at half-integer spatial offsets and
/// half-integer time, the predictor stage of the scheme. Buffers are
/// fully overwritten each step and carry no state across steps; they
/// are kept allocated only to avoid churn.
#[derive(Clone, Debug)]
pub struct StageState {
    /// Staggered height.
    pub h: Grid,
    /// Staggered x-momentum.
    pub u: Grid,
    /// Staggered y-momentum.
    pub v: Grid,
}

impl StageState {
    /// Allocate zeroed stage buffers for interior resolution `n`.
    pub fn zeros(n: usize) -> Self {
        let side = n + 1;
        Self {
            h: Grid::zeros(side, side),
            u: Grid::zeros(side, side),
            v: Grid::zeros(side, side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiescent_shapes_and_values() {
        let s = PrimaryState::quiescent(4);
        assert_eq!(s.n(), 4);
        assert_eq!(s.side(), 6);
        assert_eq!(s.h.rows(), 6);
        assert_eq!(s.h.cols(), 6);
        assert!(s.h.as_slice().iter().all(|&v| v == 1.0));
        assert!(s.u.as_slice().iter().all(|&v| v == 0.0));
        assert!(s.v.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn stage_buffers_are_one_smaller_than_primary() {
        let s = StageState::zeros(4);
        assert_eq!(s.h.rows(), 5);
        assert_eq!(s.u.cols(), 5);
        assert_eq!(s.v.rows(), 5);
    }

    #[test]
    fn minimum_resolution_is_supported() {
        let s = PrimaryState::quiescent(1);
        assert_eq!(s.side(), 3);
        let st = StageState::zeros(1);
        assert_eq!(st.h.rows(), 2);
    }
}
