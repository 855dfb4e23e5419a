//! Ripple: 2D shallow-water simulation with a Lax–Wendroff stencil engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Ripple sub-crates. For most users, adding `ripple` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // A 32-cell pond; a drop lands every 50 steps.
//! let mut engine = StencilEngine::new(EngineConfig {
//!     n: 32,
//!     drop_width: 5,
//!     drop_interval: 50,
//!     seed: 42,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! for step in 0..200 {
//!     engine.advance(StepId(step)).unwrap();
//! }
//!
//! let h = engine.height();
//! assert_eq!(h.rows(), 34);
//! // Blow-up detection is the caller's policy, not the engine's.
//! assert!(!h.has_non_finite());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | `StepId`, error types, the `UnitRand` trait |
//! | [`grid`] | `ripple-grid` | Dense grids, state triples, diagnostics |
//! | [`engine`] | `ripple-engine` | Configuration, drop kernel, stencil phases, the engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and the random-source trait (`ripple-core`).
pub use ripple_core as types;

/// Dense grid storage, state triples, and diagnostics (`ripple-grid`).
///
/// [`grid::total_variation`] is the historical instability indicator:
/// an exact conservation-law solution keeps it constant, while this
/// scheme lets it grow.
pub use ripple_grid as grid;

/// The stencil engine and its configuration (`ripple-engine`).
///
/// The phase functions in [`engine::stencil`] are exported for callers
/// that want to drive the scheme piecewise (custom injection policies,
/// analysis of individual stages).
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    pub use ripple_core::{ParameterError, StepError, StepId, UnitRand};
    pub use ripple_engine::{
        ChaChaUnitRand, DropKernel, EngineConfig, ScriptedUnitRand, StencilEngine,
    };
    pub use ripple_grid::{total_variation, Grid, PrimaryState, StageState};
}
