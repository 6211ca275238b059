//! Benchmark profiles for the Morphogen reaction-diffusion engine.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: the default 400x400 torus (160K cells)
//! - [`small_profile`]: 100x100 (10K cells) for quick iteration

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use morphogen_core::SimulationParameters;
use morphogen_engine::{BlobPlacement, SeedConfig, SimConfig};

/// The default configuration: 400x400, ten radius-10 blobs, ten sub-steps
/// per tick.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        ..SimConfig::default()
    }
}

/// 100x100 grid with four radius-6 blobs. Same kinetics as
/// [`reference_profile`].
pub fn small_profile(seed: u64) -> SimConfig {
    SimConfig {
        params: SimulationParameters {
            width: 100,
            height: 100,
            ..SimulationParameters::default()
        },
        seeding: SeedConfig {
            placement: BlobPlacement::Random { count: 4 },
            radius: 6,
            ..SeedConfig::default()
        },
        seed,
    }
}
