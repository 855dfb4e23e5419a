//! The [`StencilEngine`]: state owner and per-step driver.

use std::fmt;

use ripple_core::{ParameterError, StepError, StepId, UnitRand};
use ripple_grid::{Grid, PrimaryState, StageState};

use crate::config::EngineConfig;
use crate::kernel::DropKernel;
use crate::rand::ChaChaUnitRand;
use crate::stencil;

/// Owns the primary state, stage buffers, drop kernel, and random
/// source, and advances the simulation one timestep per call.
///
/// `advance` runs the four phases in strict order (injection, boundary,
/// predictor, corrector) and mutates the state in place; [`height`]
/// exposes the resulting `(n+2) × (n+2)` field read-only. There is no
/// internal concurrency: a step runs to completion before any read.
///
/// # Examples
///
/// ```
/// use ripple_core::StepId;
/// use ripple_engine::{EngineConfig, StencilEngine};
///
/// let mut engine = StencilEngine::new(EngineConfig {
///     n: 16,
///     drop_interval: 8,
///     ..Default::default()
/// })
/// .unwrap();
///
/// for step in 0..32 {
///     engine.advance(StepId(step)).unwrap();
/// }
/// assert_eq!(engine.height().rows(), 18);
/// ```
///
/// [`height`]: StencilEngine::height
pub struct StencilEngine {
    config: EngineConfig,
    state: PrimaryState,
    stage_x: StageState,
    stage_y: StageState,
    kernel: DropKernel,
    rand: Box<dyn UnitRand>,
    last_step: Option<u64>,
    pending_drops: u64,
    drops_injected: u64,
}

impl StencilEngine {
    /// Construct an engine with the default ChaCha8 random source
    /// seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if any configuration invariant is
    /// violated; nothing is allocated in that case.
    pub fn new(config: EngineConfig) -> Result<Self, ParameterError> {
        let rand = Box::new(ChaChaUnitRand::seeded(config.seed));
        Self::with_rand(config, rand)
    }

    /// Construct an engine with an explicitly injected random source.
    ///
    /// One draw is consumed immediately to seed the pending drop count
    /// (`ceil(draw * expected_drops)`); each injection event then
    /// consumes three more.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if any configuration invariant is
    /// violated; the random source is not drawn from in that case.
    pub fn with_rand(
        config: EngineConfig,
        mut rand: Box<dyn UnitRand>,
    ) -> Result<Self, ParameterError> {
        config.validate()?;
        let kernel = DropKernel::new(config.drop_peak, config.drop_width);
        let pending_drops = (rand.next_unit() * f64::from(config.expected_drops)).ceil() as u64;
        Ok(Self {
            state: PrimaryState::quiescent(config.n),
            stage_x: StageState::zeros(config.n),
            stage_y: StageState::zeros(config.n),
            kernel,
            rand,
            last_step: None,
            pending_drops,
            drops_injected: 0,
            config,
        })
    }

    /// Advance the simulation by one timestep.
    ///
    /// A drop is injected first when `step % drop_interval == 0`, then
    /// the boundary, predictor, and corrector phases run
    /// unconditionally. Numerical blow-up is not detected here; see the
    /// crate docs.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfOrderStep`] when `step` is not
    /// greater than the last accepted index. The first call accepts
    /// any index.
    pub fn advance(&mut self, step: StepId) -> Result<(), StepError> {
        if let Some(last) = self.last_step {
            if step.0 <= last {
                return Err(StepError::OutOfOrderStep { step: step.0, last });
            }
        }
        self.last_step = Some(step.0);

        if step.0 % self.config.drop_interval == 0 {
            self.inject_random_drop();
        }

        stencil::apply_reflective_boundary(&mut self.state);
        stencil::half_step_x(
            &self.state,
            &mut self.stage_x,
            self.config.gravity,
            self.config.dt,
            self.config.dx,
        );
        stencil::half_step_y(
            &self.state,
            &mut self.stage_y,
            self.config.gravity,
            self.config.dt,
            self.config.dy,
        );
        stencil::full_step(
            &mut self.state,
            &self.stage_x,
            &self.stage_y,
            self.config.gravity,
            self.config.dt,
            self.config.dx,
            self.config.dy,
        );
        Ok(())
    }

    /// Place one scaled kernel at a random interior offset.
    ///
    /// Three draws: row offset, column offset, amplitude scale. A draw
    /// `r` maps to offset `1 + ceil(r * (n - w))` with `w` the drop
    /// width, keeping the whole footprint inside the interior
    /// (`offset ∈ [1, n - w + 1]`).
    fn inject_random_drop(&mut self) {
        let n = self.config.n;
        // Validation guarantees drop_width <= n.
        let span = (n - self.config.drop_width) as f64;

        let oi = 1 + (self.rand.next_unit() * span).ceil() as usize;
        let oj = 1 + (self.rand.next_unit() * span).ceil() as usize;
        let scale = self.rand.next_unit();

        stencil::inject_kernel(&mut self.state.h, &self.kernel, oi, oj, scale);
        self.drops_injected += 1;
    }

    /// Read-only view of the current height field, `(n+2) × (n+2)`.
    #[inline]
    pub fn height(&self) -> &Grid {
        &self.state.h
    }

    /// Read-only view of the full primary state (height and both
    /// momentum components).
    #[inline]
    pub fn state(&self) -> &PrimaryState {
        &self.state
    }

    /// The configuration this engine was built with.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The drop kernel sampled at construction.
    #[inline]
    pub fn kernel(&self) -> &DropKernel {
        &self.kernel
    }

    /// Drop count seeded at construction from one random draw.
    /// Carried for parity with the reference scheme; the stepping loop
    /// does not consume it.
    #[inline]
    pub fn pending_drops(&self) -> u64 {
        self.pending_drops
    }

    /// Number of drops injected so far.
    #[inline]
    pub fn drops_injected(&self) -> u64 {
        self.drops_injected
    }
}

impl fmt::Debug for StencilEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StencilEngine")
            .field("config", &self.config)
            .field("last_step", &self.last_step)
            .field("pending_drops", &self.pending_drops)
            .field("drops_injected", &self.drops_injected)
            .finish_non_exhaustive()
    }
}
