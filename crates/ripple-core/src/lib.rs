//! Core types for the Ripple shallow-water stencil engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the step counter newtype, the error taxonomy shared across the
//! workspace, and the [`UnitRand`] trait through which the engine
//! receives its randomness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod rand;

pub use error::{ParameterError, StepError};
pub use id::StepId;
pub use rand::UnitRand;
