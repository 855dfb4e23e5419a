//! Integration test: the reference end-to-end scenario.
//!
//! A 4-cell grid under Earth gravity with a width-3 drop forced on step
//! zero, with scripted draws. The expected height field is rebuilt from
//! the analytic Gaussian formula and pushed through the same phases, so
//! the engine must agree to within floating-point noise.

use ripple_core::StepId;
use ripple_engine::{stencil, DropKernel, EngineConfig, ScriptedUnitRand, StencilEngine};
use ripple_grid::{PrimaryState, StageState};

const G: f64 = 9.8;
const DT: f64 = 0.02;

fn scenario_config() -> EngineConfig {
    EngineConfig {
        n: 4,
        gravity: G,
        dt: DT,
        dx: 1.0,
        dy: 1.0,
        drop_peak: 2.0,
        drop_width: 3,
        drop_interval: 1,
        expected_drops: 5,
        seed: 0,
    }
}

#[test]
fn engine_matches_analytically_seeded_reference() {
    // Construction draw, then row, column, scale.
    let rand = ScriptedUnitRand::new(vec![0.0, 0.5, 0.5, 1.0]);
    let mut engine =
        StencilEngine::with_rand(scenario_config(), Box::new(rand)).expect("valid config");
    engine.advance(StepId(0)).expect("first step");

    // Reference: inject the analytic kernel by hand at the offsets the
    // draws imply (1 + ceil(0.5 * 1) = 2 on both axes), then run the
    // same phases.
    let n = 4;
    let mut expected = PrimaryState::quiescent(n);
    for i in 0..2 {
        let x = -1.0 + i as f64; // width 3: samples at -1 and 0
        for j in 0..2 {
            let y = -1.0 + j as f64;
            expected.h[(2 + i, 2 + j)] += 2.0 * (-5.0 * (x * x + y * y)).exp();
        }
    }
    let mut sx = StageState::zeros(n);
    let mut sy = StageState::zeros(n);
    stencil::apply_reflective_boundary(&mut expected);
    stencil::half_step_x(&expected, &mut sx, G, DT, 1.0);
    stencil::half_step_y(&expected, &mut sy, G, DT, 1.0);
    stencil::full_step(&mut expected, &sx, &sy, G, DT, 1.0, 1.0);

    let h = engine.height();
    for i in 0..expected.side() {
        for j in 0..expected.side() {
            assert!(
                (h[(i, j)] - expected.h[(i, j)]).abs() < 1e-9,
                "height mismatch at ({i}, {j}): {} vs {}",
                h[(i, j)],
                expected.h[(i, j)],
            );
        }
    }
}

#[test]
fn scripted_injection_mass_matches_kernel_sum() {
    // With a negligible timestep the corrector barely moves mass, so
    // the post-step total reflects the injection alone.
    let rand = ScriptedUnitRand::new(vec![0.0, 0.5, 0.5, 1.0]);
    let cfg = EngineConfig {
        dt: 1e-12,
        ..scenario_config()
    };
    let mut engine = StencilEngine::with_rand(cfg, Box::new(rand)).expect("valid config");

    let before = engine.height().total();
    engine.advance(StepId(0)).expect("first step");

    let kernel = DropKernel::new(2.0, 3);
    let gained = engine.height().total() - before;
    assert!(
        (gained - kernel.total()).abs() < 1e-6,
        "mass gained {gained} vs kernel sum {}",
        kernel.total(),
    );
}
