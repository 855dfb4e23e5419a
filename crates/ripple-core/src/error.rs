//! Error types for the Ripple workspace.
//!
//! Construction-time parameter errors are fatal and surfaced before any
//! state is allocated. Numerical blow-up (NaN/Inf in the height field)
//! is deliberately *not* an error raised by the engine: detecting and
//! reacting to instability is the caller's policy.

use std::error::Error;
use std::fmt;

/// Errors rejected during engine configuration validation.
///
/// Every variant names the offending parameter and the configured value
/// so the failure is actionable without a debugger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterError {
    /// Grid resolution `n` is below the minimum of 1.
    GridTooSmall {
        /// The configured interior cell count per side.
        configured: usize,
    },
    /// Timestep `dt` is zero, negative, or non-finite.
    NonPositiveTimestep {
        /// The invalid value.
        value: f64,
    },
    /// A cell spacing (`dx` or `dy`) is zero, negative, or non-finite.
    NonPositiveSpacing {
        /// Which axis: `"dx"` or `"dy"`.
        axis: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A parameter that must be finite is NaN or infinite.
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Drop width is below the minimum of 2 (the kernel would be empty).
    DropWidthTooSmall {
        /// The configured width.
        configured: usize,
    },
    /// Drop width exceeds the grid resolution; the kernel footprint
    /// could not fit inside the interior.
    DropWidthExceedsGrid {
        /// The configured width.
        width: usize,
        /// The grid resolution it must fit within.
        n: usize,
    },
    /// Drop interval is zero; the injection test divides by it.
    ZeroDropInterval,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { configured } => {
                write!(f, "grid resolution {configured} is below minimum of 1")
            }
            Self::NonPositiveTimestep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::NonPositiveSpacing { axis, value } => {
                write!(f, "{axis} must be finite and positive, got {value}")
            }
            Self::NonFiniteParameter { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::DropWidthTooSmall { configured } => {
                write!(f, "drop width {configured} is below minimum of 2")
            }
            Self::DropWidthExceedsGrid { width, n } => {
                write!(f, "drop width {width} does not fit inside a grid of resolution {n}")
            }
            Self::ZeroDropInterval => write!(f, "drop interval must be at least 1"),
        }
    }
}

impl Error for ParameterError {}

/// Errors from the engine during `advance()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// `advance` was called with a step index not greater than the
    /// last one seen. The step index drives drop scheduling, so
    /// replaying or reordering indices would silently change the
    /// injection cadence.
    OutOfOrderStep {
        /// The offending step index.
        step: u64,
        /// The last index the engine accepted.
        last: u64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrderStep { step, last } => {
                write!(f, "step index {step} is not greater than last accepted index {last}")
            }
        }
    }
}

impl Error for StepError {}
