//! The simulation driver.
//!
//! [`Simulation`] is the user-facing API. It owns the double-buffered
//! field pair exclusively; the only way to look at the fields is a
//! [`Snapshot`], which borrows the simulation.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self` and [`snapshot()`](Simulation::snapshot)
//! takes `&self`, so a caller cannot hold a snapshot across an
//! [`advance()`](Simulation::advance). Each observed snapshot is one
//! complete generation, never a mix of two.

use std::time::Instant;

use morphogen_core::{FieldError, FieldPair, SimulationParameters};
use morphogen_propagators::GrayScott;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, SeedConfig, SimConfig};
use crate::metrics::StepMetrics;
use crate::pingpong::DoubleBuffer;
use crate::seeder::Seeder;
use crate::snapshot::Snapshot;

/// Single-threaded Gray-Scott simulation.
///
/// # Example
///
/// ```
/// use morphogen_engine::{SimConfig, Simulation};
///
/// let mut config = SimConfig::default();
/// config.params.width = 64;
/// config.params.height = 64;
/// config.seeding.radius = 4;
///
/// let mut sim = Simulation::new(config).unwrap();
/// sim.tick();
/// let snap = sim.snapshot();
/// assert_eq!(snap.generation(), 10);
/// assert!(snap.pair().is_bounded());
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    stepper: GrayScott,
    seeder: Seeder,
    buffers: DoubleBuffer,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config`, allocate the fields, and seed them.
    ///
    /// Fails without allocating if any parameter is invalid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = config.params;
        let mut initial = FieldPair::background(params.width, params.height)?;
        let seeder = Seeder::new(config.seeding.clone());
        seeder.seed(&mut initial, &mut ChaCha8Rng::seed_from_u64(config.seed));
        Ok(Self {
            stepper: GrayScott::new(&params),
            seeder,
            buffers: DoubleBuffer::new(initial),
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    /// Start from caller-supplied fields instead of seeding.
    ///
    /// The pair must match `params`' dimensions and hold only finite values
    /// in `[0, 1]`. The stored seeding config is
    /// [`SeedConfig::background_only`], which [`reseed`](Self::reseed) uses.
    pub fn from_fields(params: SimulationParameters, pair: FieldPair) -> Result<Self, ConfigError> {
        let config = SimConfig {
            params,
            seeding: SeedConfig::background_only(),
            seed: 0,
        };
        config.validate()?;
        if (pair.width(), pair.height()) != (params.width, params.height) {
            return Err(FieldError::ShapeMismatch {
                u: (params.width, params.height),
                v: (pair.width(), pair.height()),
            }
            .into());
        }
        pair.validate_bounded()?;
        Ok(Self {
            stepper: GrayScott::new(&params),
            seeder: Seeder::new(config.seeding.clone()),
            buffers: DoubleBuffer::new(pair),
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    /// Apply `substeps` Gray-Scott steps in sequence, each with the
    /// configured `dt`.
    ///
    /// Each sub-step reads the generation published by the previous one.
    /// `advance(0)` is a no-op apart from resetting the metrics.
    pub fn advance(&mut self, substeps: u32) -> StepMetrics {
        let start = Instant::now();
        let mut slowest_substep_us = 0;
        let stepper = self.stepper;
        for _ in 0..substeps {
            let t = Instant::now();
            self.buffers
                .advance_with(|prev, next| stepper.step(prev, next));
            slowest_substep_us = slowest_substep_us.max(t.elapsed().as_micros() as u64);
        }
        self.last_metrics = StepMetrics {
            substeps,
            total_us: start.elapsed().as_micros() as u64,
            slowest_substep_us,
            generation: self.buffers.generation(),
        };
        self.last_metrics.clone()
    }

    /// One external tick: `advance(params.substeps_per_tick)`.
    pub fn tick(&mut self) -> StepMetrics {
        self.advance(self.config.params.substeps_per_tick)
    }

    /// Read-only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.buffers.published(), self.buffers.generation())
    }

    /// Rebuild the initial fields with a new RNG seed and restart at
    /// generation 0. The seeding config is unchanged.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        let seeder = &self.seeder;
        self.buffers
            .reset(|pair| seeder.seed(pair, &mut ChaCha8Rng::seed_from_u64(seed)));
        self.last_metrics = StepMetrics::default();
    }

    /// Completed sub-steps since construction or the last reseed.
    pub fn generation(&self) -> u64 {
        self.buffers.generation()
    }

    /// Run parameters.
    pub fn params(&self) -> &SimulationParameters {
        &self.config.params
    }

    /// Full configuration, including the current seed.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The stepper's kinetics, e.g. for [`GrayScott::max_stable_dt`].
    pub fn stepper(&self) -> &GrayScott {
        &self.stepper
    }

    /// Metrics from the most recent `advance`.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}
