//! Explicit Euler stepper for the Gray-Scott kinetics.
//!
//! For every cell, computed from the previous generation only:
//!
//! ```text
//! r     = U * V^2
//! U'    = clamp01(U + dt * (Du * lap(U) - r + F * (1 - U)))
//! V'    = clamp01(V + dt * (Dv * lap(V) + r - (F + K) * V))
//! ```
//!
//! [`GrayScott::step`] reads one [`FieldPair`] and writes a different one.
//! It never reads a cell it has already written, so the caller decides
//! when the new generation becomes visible.

use crate::laplacian::{stencil_sum, SPECTRAL_RADIUS};
use morphogen_core::{clamp01, FieldPair, SimulationParameters};

/// Gray-Scott reaction kinetics with 9-point diffusion.
///
/// Holds only the scalar coefficients, copied out of
/// [`SimulationParameters`] at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayScott {
    du: f32,
    dv: f32,
    feed: f32,
    kill: f32,
    dt: f32,
}

impl GrayScott {
    /// Extract the kinetics from validated run parameters.
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            du: params.du,
            dv: params.dv,
            feed: params.feed,
            kill: params.kill,
            dt: params.dt,
        }
    }

    /// Time increment applied by one [`step`](Self::step).
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Largest `dt` for which pure diffusion stays stable under explicit
    /// Euler with this stencil.
    ///
    /// Informational only. Clamping keeps values bounded regardless, but
    /// above this limit patterns degrade into grid-scale oscillation.
    pub fn max_stable_dt(&self) -> f32 {
        2.0 / (self.du.max(self.dv) * SPECTRAL_RADIUS)
    }

    /// Advance a single cell given its concentrations and Laplacians.
    #[inline]
    pub fn update_cell(&self, u: f32, v: f32, lap_u: f32, lap_v: f32) -> (f32, f32) {
        let reaction = u * v * v;
        let du = self.du * lap_u - reaction + self.feed * (1.0 - u);
        let dv = self.dv * lap_v + reaction - (self.feed + self.kill) * v;
        (clamp01(u + du * self.dt), clamp01(v + dv * self.dt))
    }

    /// Compute the next generation of `prev` into `next`.
    ///
    /// Every value of `next` is overwritten; its previous contents are
    /// irrelevant. Both pairs must share dimensions. Inputs must be finite;
    /// debug builds assert this for every cell read.
    pub fn step(&self, prev: &FieldPair, next: &mut FieldPair) {
        debug_assert_eq!(
            (prev.width(), prev.height()),
            (next.width(), next.height()),
            "stepper buffers must share dimensions"
        );
        let w = prev.width() as usize;
        let h = prev.height() as i64;
        let (pu, pv) = (prev.u(), prev.v());
        let (next_u, next_v) = next.split_mut();
        let (out_u, out_v) = (next_u.as_mut_slice(), next_v.as_mut_slice());

        // Row-walking fast path: neighbour rows are resolved once per row and
        // neighbour columns with a compare instead of a modulo.
        for y in 0..h {
            let (u_up, u_row, u_down) = (pu.row(y - 1), pu.row(y), pu.row(y + 1));
            let (v_up, v_row, v_down) = (pv.row(y - 1), pv.row(y), pv.row(y + 1));
            let base = y as usize * w;

            for x in 0..w {
                let xm = if x == 0 { w - 1 } else { x - 1 };
                let xp = if x + 1 == w { 0 } else { x + 1 };

                let (u, v) = (u_row[x], v_row[x]);
                debug_assert!(
                    u.is_finite() && v.is_finite(),
                    "non-finite input at ({x}, {y})"
                );

                let lap_u = stencil_sum(
                    u,
                    [u_up[x], u_down[x], u_row[xm], u_row[xp]],
                    [u_up[xm], u_up[xp], u_down[xm], u_down[xp]],
                );
                let lap_v = stencil_sum(
                    v,
                    [v_up[x], v_down[x], v_row[xm], v_row[xp]],
                    [v_up[xm], v_up[xp], v_down[xm], v_down[xp]],
                );

                let (nu, nv) = self.update_cell(u, v, lap_u, lap_v);
                out_u[base + x] = nu;
                out_v[base + x] = nv;
            }
        }
    }
}
