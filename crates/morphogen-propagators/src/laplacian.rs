//! Discrete Laplacian over the 3x3 neighbourhood.
//!
//! ```text
//!   0.05  0.2  0.05
//!   0.2  -1.0  0.2
//!   0.05  0.2  0.05
//! ```
//!
//! The weights sum to zero, so a constant field has a Laplacian of
//! exactly `0.0`. The diagonal taps make diffusion less grid-anisotropic
//! than a pure 4-point stencil.

use morphogen_core::{wrap_axis, Field};

/// Weight of the centre cell.
pub const CENTER_WEIGHT: f32 = -1.0;
/// Weight of each axis-aligned neighbour (N, S, W, E).
pub const AXIS_WEIGHT: f32 = 0.2;
/// Weight of each diagonal neighbour.
pub const DIAGONAL_WEIGHT: f32 = 0.05;

/// Largest eigenvalue magnitude of the stencil, reached by the
/// checkerboard mode: `1 + 4 * 0.2 - 4 * 0.05`.
pub const SPECTRAL_RADIUS: f32 = 1.6;

/// Weighted stencil sum from already-gathered values.
///
/// `axis` is `[N, S, W, E]` and `diagonal` is `[NW, NE, SW, SE]`. Every
/// Laplacian in the workspace goes through this function, so the
/// reference path and the stepper's row-walking path agree bit for bit.
///
/// Neighbours are summed per group before weighting; for a constant
/// field `0.2 * 4c + 0.05 * 4c` rounds back to `c`, which keeps the
/// background state an exact fixed point.
#[inline]
pub fn stencil_sum(center: f32, axis: [f32; 4], diagonal: [f32; 4]) -> f32 {
    let axis_sum = (axis[0] + axis[1]) + (axis[2] + axis[3]);
    let diagonal_sum = (diagonal[0] + diagonal[1]) + (diagonal[2] + diagonal[3]);
    AXIS_WEIGHT * axis_sum + DIAGONAL_WEIGHT * diagonal_sum + CENTER_WEIGHT * center
}

/// Laplacian of `field` at `(x, y)`.
///
/// Neighbours are read through [`Field::get`], so coordinates on (or
/// beyond) an edge wrap to the opposite side. Pure: identical inputs
/// always give the identical value. Any `i64` coordinate is accepted.
pub fn laplacian(field: &Field, x: i64, y: i64) -> f32 {
    let x = wrap_axis(x, field.width()) as i64;
    let y = wrap_axis(y, field.height()) as i64;
    stencil_sum(
        field.get(x, y),
        [
            field.get(x, y - 1),
            field.get(x, y + 1),
            field.get(x - 1, y),
            field.get(x + 1, y),
        ],
        [
            field.get(x - 1, y - 1),
            field.get(x + 1, y - 1),
            field.get(x - 1, y + 1),
            field.get(x + 1, y + 1),
        ],
    )
}
