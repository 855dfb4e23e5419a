//! Benchmark profiles for the Ripple shallow-water engine.
//!
//! Provides pre-built [`EngineConfig`] profiles shared by the criterion
//! benches: a reference 64-cell grid matching the classic demonstration
//! run, and a stress profile an order of magnitude larger.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_engine::EngineConfig;

/// Reference profile: the classic 64-cell demonstration grid, with a
/// drop every 100 steps so benches exercise the injection path.
pub fn reference_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        n: 64,
        drop_interval: 100,
        seed,
        ..Default::default()
    }
}

/// Stress profile: a 512-cell grid (~262K interior cells per field).
pub fn stress_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        n: 512,
        drop_interval: 100,
        seed,
        ..Default::default()
    }
}
