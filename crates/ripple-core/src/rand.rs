//! The [`UnitRand`] trait: the engine's only source of nondeterminism.

/// A source of independent draws uniformly distributed in `[0, 1)`.
///
/// Drop injection consumes three draws per event (row offset, column
/// offset, amplitude scale); engine construction consumes one draw to
/// seed the pending drop count. Everything else the engine does is
/// deterministic arithmetic, so two engines fed identical draw
/// sequences produce bit-identical state.
///
/// Implementations backed by a seedable RNG live in `ripple-engine`;
/// tests can script exact sequences instead.
pub trait UnitRand: Send {
    /// Produce the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<T: UnitRand + ?Sized> UnitRand for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
