//! Lax–Wendroff stencil engine for the 2D shallow-water equations.
//!
//! The [`StencilEngine`] owns the full simulation state and advances it
//! one timestep per call: a conditional Gaussian drop is injected, the
//! reflective wall conditions are re-imposed on the ghost layer, the
//! half-step staggered fluxes are computed in both directions, and the
//! conservative corrector updates the interior.
//!
//! The scheme is the classic two-stage (predictor–corrector)
//! Lax–Wendroff discretization. It is explicit and unguarded: at large
//! `dt` or long run lengths the state can blow up to NaN/Inf, which the
//! engine neither detects nor corrects. Callers poll
//! [`Grid::has_non_finite`](ripple_grid::Grid::has_non_finite) and
//! choose their own policy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod kernel;
mod rand;
pub mod stencil;

pub use config::EngineConfig;
pub use engine::StencilEngine;
pub use kernel::DropKernel;
pub use rand::{ChaChaUnitRand, ScriptedUnitRand};
