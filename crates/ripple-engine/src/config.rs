//! Engine configuration and validation.

use ripple_core::ParameterError;

/// Complete configuration for constructing a [`StencilEngine`](crate::StencilEngine).
///
/// [`validate()`](EngineConfig::validate) checks every invariant before
/// any state is allocated; the engine constructor calls it first.
///
/// `Default` reproduces the parameters of the classic demonstration
/// run: a 64-cell grid under Earth gravity, unit cell spacing, and a
/// height-2, width-11 drop every 1000 steps.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Interior cells per side. Stored grids are `(n+2) × (n+2)`.
    pub n: usize,
    /// Gravitational constant `g`.
    pub gravity: f64,
    /// Timestep.
    pub dt: f64,
    /// Cell spacing along the x axis.
    pub dx: f64,
    /// Cell spacing along the y axis.
    pub dy: f64,
    /// Peak height of the injected drop.
    pub drop_peak: f64,
    /// Drop width parameter; the kernel is `(width-1) × (width-1)`.
    pub drop_width: usize,
    /// A drop is injected whenever `step % drop_interval == 0`.
    pub drop_interval: u64,
    /// Expected number of drops over a run. Consumed only to seed the
    /// pending drop count at construction; the stepping loop does not
    /// read it.
    pub expected_drops: u32,
    /// Seed for the default ChaCha8-backed random source.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            n: 64,
            gravity: 9.8,
            dt: 0.02,
            dx: 1.0,
            dy: 1.0,
            drop_peak: 2.0,
            drop_width: 11,
            drop_interval: 1000,
            expected_drops: 5,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Check every construction invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant:
    /// - `n < 1`
    /// - `dt`, `dx`, or `dy` non-finite or not positive
    /// - `gravity` or `drop_peak` non-finite
    /// - `drop_width < 2` (the kernel would be empty)
    /// - `drop_width > n` (the footprint cannot fit in the interior)
    /// - `drop_interval == 0`
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.n < 1 {
            return Err(ParameterError::GridTooSmall { configured: self.n });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ParameterError::NonPositiveTimestep { value: self.dt });
        }
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(ParameterError::NonPositiveSpacing {
                axis: "dx",
                value: self.dx,
            });
        }
        if !self.dy.is_finite() || self.dy <= 0.0 {
            return Err(ParameterError::NonPositiveSpacing {
                axis: "dy",
                value: self.dy,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ParameterError::NonFiniteParameter {
                name: "gravity",
                value: self.gravity,
            });
        }
        if !self.drop_peak.is_finite() {
            return Err(ParameterError::NonFiniteParameter {
                name: "drop_peak",
                value: self.drop_peak,
            });
        }
        if self.drop_width < 2 {
            return Err(ParameterError::DropWidthTooSmall {
                configured: self.drop_width,
            });
        }
        if self.drop_width > self.n {
            return Err(ParameterError::DropWidthExceedsGrid {
                width: self.drop_width,
                n: self.n,
            });
        }
        if self.drop_interval == 0 {
            return Err(ParameterError::ZeroDropInterval);
        }
        Ok(())
    }
}
