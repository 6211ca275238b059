//! Simulation driver for the Morphogen reaction-diffusion engine.
//!
//! [`Simulation`] owns a double-buffered [`FieldPair`](morphogen_core::FieldPair),
//! seeds it from a [`SimConfig`], advances it with the Gray-Scott stepper,
//! and hands out read-only [`Snapshot`]s for rendering.
//!
//! Execution is single-threaded and synchronous: an external loop calls
//! [`Simulation::advance`] (or [`Simulation::tick`]) and then reads a
//! snapshot. A snapshot borrows the simulation, so the borrow checker
//! rules out observing a half-written generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod hash;
pub mod metrics;
pub mod pingpong;
pub mod seeder;
pub mod simulation;
pub mod snapshot;

pub use codec::{decode_field, encode_field, CodecError};
pub use config::{BlobPlacement, ConfigError, SeedConfig, SimConfig};
pub use hash::pair_hash;
pub use metrics::StepMetrics;
pub use pingpong::DoubleBuffer;
pub use seeder::Seeder;
pub use simulation::Simulation;
pub use snapshot::{OwnedSnapshot, Snapshot};
