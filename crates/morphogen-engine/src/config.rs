//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the complete input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimConfig::validate)
//! checks every invariant up front so construction either fully succeeds
//! or fails without allocating.

use std::error::Error;
use std::fmt;

use morphogen_core::{FieldError, ParamError, SimulationParameters};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`] or initial fields.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Run parameters failed validation.
    Params(ParamError),
    /// Supplied initial fields are malformed or mismatched.
    Field(FieldError),
    /// A seed magnitude range is unordered, non-finite, or leaves `[0, 1]`.
    InvalidSeedRange {
        /// Which range (`"u_range"` or `"v_range"`).
        name: &'static str,
        /// Lower bound.
        lo: f32,
        /// Upper bound.
        hi: f32,
    },
    /// More blobs than [`SimConfig::MAX_BLOBS`].
    TooManyBlobs {
        /// The configured cap.
        max: usize,
        /// The requested count.
        actual: usize,
    },
    /// Blob radius exceeds the larger grid dimension.
    BlobRadiusTooLarge {
        /// The requested radius.
        radius: u32,
        /// `max(width, height)`.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params(e) => write!(f, "params: {e}"),
            Self::Field(e) => write!(f, "field: {e}"),
            Self::InvalidSeedRange { name, lo, hi } => write!(
                f,
                "{name} [{lo}, {hi}] must be finite, ordered, and inside [0, 1]"
            ),
            Self::TooManyBlobs { max, actual } => {
                write!(f, "blob count {actual} exceeds maximum of {max}")
            }
            Self::BlobRadiusTooLarge { radius, max } => {
                write!(f, "blob radius {radius} exceeds grid extent {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Params(e) => Some(e),
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Params(e)
    }
}

impl From<FieldError> for ConfigError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

// ── SeedConfig ─────────────────────────────────────────────────────

/// Where perturbation blobs are centred.
#[derive(Clone, Debug, PartialEq)]
pub enum BlobPlacement {
    /// `count` centres drawn uniformly over the grid from the seeded RNG.
    Random {
        /// Number of blobs.
        count: usize,
    },
    /// An injected centre sequence, stamped in order. Coordinates wrap.
    Fixed(Vec<(i64, i64)>),
}

impl BlobPlacement {
    /// Number of blobs this placement produces.
    pub fn count(&self) -> usize {
        match self {
            Self::Random { count } => *count,
            Self::Fixed(centers) => centers.len(),
        }
    }
}

/// Initial perturbation of the background state.
///
/// Each blob writes every cell within `radius` (Euclidean, inclusive) of
/// its centre with `U ~ U[u_range]` and `V ~ U[v_range]`. Later blobs
/// overwrite earlier ones where they overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedConfig {
    /// Blob centres.
    pub placement: BlobPlacement,
    /// Blob radius in cells. Zero stamps only the centre cell.
    pub radius: u32,
    /// Inclusive range for U inside a blob. Default: `[0.5, 1.0]`.
    pub u_range: (f32, f32),
    /// Inclusive range for V inside a blob. Default: `[0.25, 0.75]`.
    pub v_range: (f32, f32),
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            placement: BlobPlacement::Random { count: 10 },
            radius: 10,
            u_range: (0.5, 1.0),
            v_range: (0.25, 0.75),
        }
    }
}

impl SeedConfig {
    /// No blobs: the pure `U = 1, V = 0` background.
    ///
    /// The radius is 0 so the config validates on any grid, down to 1x1.
    pub fn background_only() -> Self {
        Self {
            placement: BlobPlacement::Fixed(Vec::new()),
            radius: 0,
            ..Self::default()
        }
    }

    /// Validate blob count and magnitude ranges.
    ///
    /// The radius check needs the grid size and lives in
    /// [`SimConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.placement.count();
        if count > SimConfig::MAX_BLOBS {
            return Err(ConfigError::TooManyBlobs {
                max: SimConfig::MAX_BLOBS,
                actual: count,
            });
        }
        for (name, (lo, hi)) in [("u_range", self.u_range), ("v_range", self.v_range)] {
            let ok = lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi && hi <= 1.0;
            if !ok {
                return Err(ConfigError::InvalidSeedRange { name, lo, hi });
            }
        }
        Ok(())
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// [`Default`] is the reference setup: a 400x400 torus seeded with ten
/// random blobs of radius 10.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimConfig {
    /// Grid size, kinetics, and time integration.
    pub params: SimulationParameters,
    /// Initial perturbation.
    pub seeding: SeedConfig,
    /// RNG seed for blob placement and magnitudes.
    pub seed: u64,
}

impl SimConfig {
    /// Upper bound on the number of seeded blobs.
    pub const MAX_BLOBS: usize = 65_536;

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        self.seeding.validate()?;
        let max = self.params.width.max(self.params.height);
        if self.seeding.radius > max {
            return Err(ConfigError::BlobRadiusTooLarge {
                radius: self.seeding.radius,
                max,
            });
        }
        Ok(())
    }
}
