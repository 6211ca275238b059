//! Initial-state construction: background fill plus circular blobs.
//!
//! All randomness comes from a caller-supplied generator, so a seeded
//! ChaCha8 stream reproduces the same initial fields bit for bit.
//!
//! Draw order, per blob: centre x, centre y (random placement only), then
//! for every cell of the footprint in row-major offset order, one U draw
//! followed by one V draw.

use morphogen_core::{wrap_axis, FieldPair};
use rand::Rng;

use crate::config::{BlobPlacement, SeedConfig};

/// Stamps a [`SeedConfig`] onto a [`FieldPair`].
#[derive(Clone, Debug)]
pub struct Seeder {
    config: SeedConfig,
    footprint: Vec<(i64, i64)>,
}

impl Seeder {
    /// Create a seeder, precomputing the blob footprint.
    pub fn new(config: SeedConfig) -> Self {
        let footprint = Self::circle_offsets(config.radius);
        Self { config, footprint }
    }

    /// Offsets `(dx, dy)` with `dx^2 + dy^2 <= radius^2`, row-major from
    /// `(-radius, -radius)`.
    pub fn circle_offsets(radius: u32) -> Vec<(i64, i64)> {
        let r = i64::from(radius);
        let r_sq = r * r;
        let mut offsets = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    offsets.push((dx, dy));
                }
            }
        }
        offsets
    }

    /// The configuration this seeder stamps.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Reset `pair` to the background state, then stamp every blob.
    pub fn seed<R: Rng + ?Sized>(&self, pair: &mut FieldPair, rng: &mut R) {
        pair.reset_background();
        match &self.config.placement {
            BlobPlacement::Random { count } => {
                let (w, h) = (pair.width(), pair.height());
                for _ in 0..*count {
                    let cx = i64::from(rng.random_range(0..w));
                    let cy = i64::from(rng.random_range(0..h));
                    self.stamp(pair, cx, cy, rng);
                }
            }
            BlobPlacement::Fixed(centers) => {
                for &(cx, cy) in centers {
                    self.stamp(pair, cx, cy, rng);
                }
            }
        }
    }

    /// Write one blob centred at `(cx, cy)`. Cells past an edge wrap.
    ///
    /// Any `i64` centre is accepted; it is wrapped onto the grid before the
    /// footprint offsets are added.
    pub fn stamp<R: Rng + ?Sized>(&self, pair: &mut FieldPair, cx: i64, cy: i64, rng: &mut R) {
        let (u_lo, u_hi) = self.config.u_range;
        let (v_lo, v_hi) = self.config.v_range;
        let cx = wrap_axis(cx, pair.width()) as i64;
        let cy = wrap_axis(cy, pair.height()) as i64;
        let (u, v) = pair.split_mut();
        for &(dx, dy) in &self.footprint {
            let (x, y) = (cx + dx, cy + dy);
            u.set(x, y, rng.random_range(u_lo..=u_hi));
            v.set(x, y, rng.random_range(v_lo..=v_hi));
        }
    }
}
