//! Text-mode driver: steps the engine and renders the height field as
//! ASCII shading. Rendering cadence and instability policy live here,
//! in the driver, not in the engine.
//!
//! ```text
//! cargo run --example waves
//! ```

use ripple::prelude::*;

const STEPS: u64 = 400;
const RENDER_EVERY: u64 = 50;
const SHADES: &[u8] = b" .:-=+*#%@";

fn render(h: &Grid) {
    for i in 0..h.rows() {
        let mut line = String::with_capacity(h.cols());
        for j in 0..h.cols() {
            // Map heights around the unit rest level into the ramp.
            let t = ((h[(i, j)] - 0.8) / 0.6).clamp(0.0, 1.0);
            let idx = (t * (SHADES.len() - 1) as f64).round() as usize;
            line.push(SHADES[idx] as char);
        }
        println!("{line}");
    }
}

fn main() {
    let mut engine = StencilEngine::new(EngineConfig {
        n: 24,
        drop_width: 7,
        drop_interval: 100,
        seed: 42,
        ..Default::default()
    })
    .expect("valid configuration");

    for step in 0..STEPS {
        engine.advance(StepId(step)).expect("monotonic steps");

        let h = engine.height();
        if h.has_non_finite() {
            // Caller-owned policy: report and stop rather than render garbage.
            eprintln!("numerical blow-up at step {step}; halting");
            break;
        }

        if step % RENDER_EVERY == 0 {
            println!(
                "step {step}  drops {}  mass {:.3}  tv {:.3}",
                engine.drops_injected(),
                h.total(),
                total_variation(h),
            );
            render(h);
            println!();
        }
    }
}
