//! The four phases of one Lax–Wendroff timestep.
//!
//! Phase order is part of the scheme's correctness contract: drop
//! injection, reflective boundary enforcement, half-step staggered flux
//! computation (X then Y stage), full-step conservative update. The
//! staggered stages must be fully materialized before the corrector
//! reads them; collapsing predictor and corrector into one pass would
//! break the second-order property.
//!
//! Flux functions are the standard shallow-water ones: the height flux
//! is the momentum component in the stage direction; momentum fluxes
//! are `q²/h + g/2·h²` in the normal direction and `q_x·q_y/h` across.
//! Division by `h` is deliberately unguarded; a height that reaches
//! zero produces non-finite values for the caller to detect.

use crate::kernel::DropKernel;
use ripple_grid::{Grid, PrimaryState, StageState};

/// Normal-direction momentum flux: `q²/h + g/2·h²`.
#[inline]
fn flux_normal(q: f64, h: f64, gravity: f64) -> f64 {
    q * q / h + 0.5 * gravity * h * h
}

/// Cross-direction momentum flux: `q_a·q_b/h`.
#[inline]
fn flux_cross(qa: f64, qb: f64, h: f64) -> f64 {
    qa * qb / h
}

/// Add `scale * kernel` into the height field with the kernel's
/// top-left cell at `(oi, oj)`.
///
/// The caller guarantees the footprint lies inside the grid; offsets
/// produced by the engine always keep it within the interior.
pub fn inject_kernel(h: &mut Grid, kernel: &DropKernel, oi: usize, oj: usize, scale: f64) {
    for i in 0..kernel.side() {
        for j in 0..kernel.side() {
            h[(oi + i, oj + j)] += scale * kernel[(i, j)];
        }
    }
}

/// Impose reflective (solid wall) conditions on the ghost layer.
///
/// Height and the tangential momentum component reflect unchanged; the
/// normal component reflects with a sign flip, giving zero net flux
/// through each wall. Columns first, then rows, so the corners take
/// their values from the row pass exactly as the reference scheme does.
pub fn apply_reflective_boundary(state: &mut PrimaryState) {
    let n = state.n();
    for k in 0..state.side() {
        state.h[(k, 0)] = state.h[(k, 1)];
        state.u[(k, 0)] = state.u[(k, 1)];
        state.v[(k, 0)] = -state.v[(k, 1)];

        state.h[(k, n + 1)] = state.h[(k, n)];
        state.u[(k, n + 1)] = state.u[(k, n)];
        state.v[(k, n + 1)] = -state.v[(k, n)];
    }
    for k in 0..state.side() {
        state.h[(0, k)] = state.h[(1, k)];
        state.u[(0, k)] = -state.u[(1, k)];
        state.v[(0, k)] = state.v[(1, k)];

        state.h[(n + 1, k)] = state.h[(n, k)];
        state.u[(n + 1, k)] = -state.u[(n, k)];
        state.v[(n + 1, k)] = state.v[(n, k)];
    }
}

/// Predictor, X stage: estimate state at half-integer offsets in the
/// first grid direction and half-integer time.
///
/// Each staggered cell is the average of the two adjacent primary
/// cells minus `dt/(2·dx)` times the flux difference between them.
/// Covers `i ∈ [0, n]`, `j ∈ [0, n-1]`; the remaining stage column is
/// untouched (never read by the corrector).
pub fn half_step_x(state: &PrimaryState, stage: &mut StageState, gravity: f64, dt: f64, dx: f64) {
    let n = state.n();
    let c = dt / (2.0 * dx);
    let (h, u, v) = (&state.h, &state.u, &state.v);

    for i in 0..=n {
        for j in 0..n {
            let (ha, hb) = (h[(i + 1, j + 1)], h[(i, j + 1)]);
            let (ua, ub) = (u[(i + 1, j + 1)], u[(i, j + 1)]);
            let (va, vb) = (v[(i + 1, j + 1)], v[(i, j + 1)]);

            stage.h[(i, j)] = (ha + hb) / 2.0 - c * (ua - ub);
            stage.u[(i, j)] = (ua + ub) / 2.0
                - c * (flux_normal(ua, ha, gravity) - flux_normal(ub, hb, gravity));
            stage.v[(i, j)] =
                (va + vb) / 2.0 - c * (flux_cross(ua, va, ha) - flux_cross(ub, vb, hb));
        }
    }
}

/// Predictor, Y stage: the analogue of [`half_step_x`] in the second
/// grid direction, covering `i ∈ [0, n-1]`, `j ∈ [0, n]`.
pub fn half_step_y(state: &PrimaryState, stage: &mut StageState, gravity: f64, dt: f64, dy: f64) {
    let n = state.n();
    let c = dt / (2.0 * dy);
    let (h, u, v) = (&state.h, &state.u, &state.v);

    for i in 0..n {
        for j in 0..=n {
            let (ha, hb) = (h[(i + 1, j + 1)], h[(i + 1, j)]);
            let (ua, ub) = (u[(i + 1, j + 1)], u[(i + 1, j)]);
            let (va, vb) = (v[(i + 1, j + 1)], v[(i + 1, j)]);

            stage.h[(i, j)] = (ha + hb) / 2.0 - c * (va - vb);
            stage.u[(i, j)] =
                (ua + ub) / 2.0 - c * (flux_cross(va, ua, ha) - flux_cross(vb, ub, hb));
            stage.v[(i, j)] = (va + vb) / 2.0
                - c * (flux_normal(va, ha, gravity) - flux_normal(vb, hb, gravity));
        }
    }
}

/// Corrector: apply the divergence of the half-step fluxes to every
/// interior cell, advancing the primary state one full timestep.
///
/// Reads only the staggered stages; both must have been recomputed
/// from the current primary state by the predictor phases.
pub fn full_step(
    state: &mut PrimaryState,
    stage_x: &StageState,
    stage_y: &StageState,
    gravity: f64,
    dt: f64,
    dx: f64,
    dy: f64,
) {
    let n = state.n();
    let cx = dt / dx;
    let cy = dt / dy;

    for i in 1..=n {
        for j in 1..=n {
            let (hxa, hxb) = (stage_x.h[(i, j - 1)], stage_x.h[(i - 1, j - 1)]);
            let (uxa, uxb) = (stage_x.u[(i, j - 1)], stage_x.u[(i - 1, j - 1)]);
            let (vxa, vxb) = (stage_x.v[(i, j - 1)], stage_x.v[(i - 1, j - 1)]);

            let (hya, hyb) = (stage_y.h[(i - 1, j)], stage_y.h[(i - 1, j - 1)]);
            let (uya, uyb) = (stage_y.u[(i - 1, j)], stage_y.u[(i - 1, j - 1)]);
            let (vya, vyb) = (stage_y.v[(i - 1, j)], stage_y.v[(i - 1, j - 1)]);

            state.h[(i, j)] -= cx * (uxa - uxb) + cy * (vya - vyb);

            state.u[(i, j)] -= cx
                * (flux_normal(uxa, hxa, gravity) - flux_normal(uxb, hxb, gravity))
                + cy * (flux_cross(vya, uya, hya) - flux_cross(vyb, uyb, hyb));

            state.v[(i, j)] -= cx * (flux_cross(uxa, vxa, hxa) - flux_cross(uxb, vxb, hxb))
                + cy * (flux_normal(vya, hya, gravity) - flux_normal(vyb, hyb, gravity));
        }
    }
}
