//! Morphogen: a Gray-Scott reaction-diffusion engine on a toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Morphogen sub-crates. For most users, adding `morphogen` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use morphogen::prelude::*;
//!
//! let config = SimConfig {
//!     params: SimulationParameters {
//!         width: 48,
//!         height: 32,
//!         ..Default::default()
//!     },
//!     seeding: SeedConfig {
//!         placement: BlobPlacement::Random { count: 3 },
//!         radius: 4,
//!         ..Default::default()
//!     },
//!     seed: 42,
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let metrics = sim.advance(25);
//! assert_eq!(metrics.generation, 25);
//!
//! let snap = sim.snapshot();
//! assert!(snap.pair().is_bounded());
//! let _intensity = snap.display_value(0, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `morphogen-core` | Fields, parameters, error types |
//! | [`propagators`] | `morphogen-propagators` | Laplacian stencil and Gray-Scott stepper |
//! | [`engine`] | `morphogen-engine` | Simulation driver, seeding, snapshots, codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fields, run parameters, and error types (`morphogen-core`).
///
/// [`types::Field`] is a toroidal 2-D grid of `f32`; [`types::FieldPair`]
/// holds the U and V species together.
pub use morphogen_core as types;

/// Laplacian stencil and Gray-Scott stepper (`morphogen-propagators`).
pub use morphogen_propagators as propagators;

/// Simulation driver (`morphogen-engine`).
///
/// [`engine::Simulation`] owns the double-buffered fields; read them
/// through [`engine::Snapshot`].
pub use morphogen_engine as engine;

/// Common imports for typical Morphogen usage.
///
/// ```rust
/// use morphogen::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use morphogen_core::{Field, FieldPair, SimulationParameters};

    // Errors
    pub use morphogen_core::{FieldError, ParamError};
    pub use morphogen_engine::{CodecError, ConfigError};

    // Stepper
    pub use morphogen_propagators::GrayScott;

    // Engine
    pub use morphogen_engine::{
        BlobPlacement, OwnedSnapshot, SeedConfig, SimConfig, Simulation, Snapshot, StepMetrics,
    };
}
