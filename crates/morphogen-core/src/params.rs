//! Immutable run parameters for a Gray-Scott simulation.

use crate::error::ParamError;
use crate::field::Field;

/// Grid size, kinetics, and time integration settings for one run.
///
/// Passed by value to the simulation at construction and never mutated
/// afterwards, so independent simulations can coexist in one process.
///
/// [`Default`] reproduces the classic reference setup: a 400x400 torus
/// with `Du = 0.916`, `Dv = 0.18`, `F = 0.095`, `K = 0.06`, `dt = 1.0`,
/// and 10 sub-steps per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Diffusion rate of species U.
    pub du: f32,
    /// Diffusion rate of species V.
    pub dv: f32,
    /// Feed rate `F` replenishing U.
    pub feed: f32,
    /// Kill rate `K` removing V.
    pub kill: f32,
    /// Time increment of one sub-step.
    pub dt: f32,
    /// Sub-steps applied by one external tick.
    pub substeps_per_tick: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            du: 0.916,
            dv: 0.18,
            feed: 0.095,
            kill: 0.06,
            dt: 1.0,
            substeps_per_tick: 10,
        }
    }
}

impl SimulationParameters {
    /// Check every structural invariant.
    ///
    /// Dimensions must be in `1..=Field::MAX_DIM` with a representable
    /// cell count; `du`, `dv`, `feed`, `kill`, and `dt` must be finite
    /// and strictly positive; at least one sub-step per tick.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(ParamError::InvalidDimension { name, value });
            }
            if value > Field::MAX_DIM {
                return Err(ParamError::DimensionTooLarge {
                    name,
                    value,
                    max: Field::MAX_DIM,
                });
            }
        }
        if (self.width as usize)
            .checked_mul(self.height as usize)
            .is_none()
        {
            return Err(ParamError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("du", self.du),
            ("dv", self.dv),
            ("feed", self.feed),
            ("kill", self.kill),
            ("dt", self.dt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamError::NonPositive { name, value });
            }
        }
        if self.substeps_per_tick == 0 {
            return Err(ParamError::ZeroSubsteps);
        }
        Ok(())
    }

    /// Number of cells in one field.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let p = SimulationParameters::default();
        assert_eq!(p.validate(), Ok(()));
        assert_eq!(p.cell_count(), 160_000);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let p = SimulationParameters {
            width: 0,
            ..Default::default()
        };
        assert_eq!(
            p.validate(),
            Err(ParamError::InvalidDimension {
                name: "width",
                value: 0
            })
        );

        let p = SimulationParameters {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ParamError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn rejects_oversized_dimension() {
        let p = SimulationParameters {
            width: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ParamError::DimensionTooLarge { name: "width", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_rates() {
        let cases: [(&str, fn(&mut SimulationParameters)); 5] = [
            ("du", |p| p.du = 0.0),
            ("dv", |p| p.dv = -0.1),
            ("feed", |p| p.feed = f32::NAN),
            ("kill", |p| p.kill = f32::INFINITY),
            ("dt", |p| p.dt = 0.0),
        ];
        for (expected, mutate) in cases {
            let mut p = SimulationParameters::default();
            mutate(&mut p);
            match p.validate() {
                Err(ParamError::NonPositive { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected NonPositive for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_zero_substeps() {
        let p = SimulationParameters {
            substeps_per_tick: 0,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(ParamError::ZeroSubsteps));
    }

    #[test]
    fn one_by_one_grid_is_valid() {
        let p = SimulationParameters {
            width: 1,
            height: 1,
            ..Default::default()
        };
        assert_eq!(p.validate(), Ok(()));
    }
}
