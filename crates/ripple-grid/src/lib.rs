//! Dense grid storage and field diagnostics for the Ripple engine.
//!
//! Provides [`Grid`], a row-major dense 2D array of `f64`, the
//! [`PrimaryState`] triple (height plus two momentum components over
//! the ghost-padded domain), the transient [`StageState`] buffers used
//! by the half-step flux computation, and caller-facing diagnostics
//! ([`total_variation`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod diagnostics;
mod grid;
mod state;

pub use diagnostics::total_variation;
pub use grid::Grid;
pub use state::{PrimaryState, StageState};
