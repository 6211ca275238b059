//! Core types for the Morphogen reaction-diffusion engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the toroidal [`Field`] grid, the [`FieldPair`] of reacting species,
//! the immutable [`SimulationParameters`] of a run, and the error types
//! shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod params;

pub use error::{FieldError, ParamError};
pub use field::{clamp01, wrap_axis, Field, FieldPair};
pub use params::SimulationParameters;
