//! Read-only views of a published generation.
//!
//! [`Snapshot`] borrows from the [`Simulation`](crate::Simulation), so the
//! simulation cannot advance while one is alive. [`OwnedSnapshot`] is a
//! deep copy for consumers that must outlive that borrow.

use morphogen_core::{clamp01, Field, FieldPair};

use crate::hash::pair_hash;

/// Borrowed, read-only view of one complete generation.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pair: &'a FieldPair,
    generation: u64,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(pair: &'a FieldPair, generation: u64) -> Self {
        Self { pair, generation }
    }

    /// Species U.
    pub fn u(&self) -> &'a Field {
        self.pair.u()
    }

    /// Species V.
    pub fn v(&self) -> &'a Field {
        self.pair.v()
    }

    /// Both species.
    pub fn pair(&self) -> &'a FieldPair {
        self.pair
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.pair.width()
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.pair.height()
    }

    /// Completed sub-steps when this generation was published.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Display intensity at `(x, y)`: `clamp01(U - V)`.
    ///
    /// This is the scalar a renderer maps to colour (for example red
    /// proportional to the value, green to its complement).
    pub fn display_value(&self, x: i64, y: i64) -> f32 {
        clamp01(self.pair.u().get(x, y) - self.pair.v().get(x, y))
    }

    /// [`display_value`](Self::display_value) for every cell, row-major.
    pub fn display_values(&self) -> Vec<f32> {
        self.pair
            .u()
            .as_slice()
            .iter()
            .zip(self.pair.v().as_slice())
            .map(|(&u, &v)| clamp01(u - v))
            .collect()
    }

    /// FNV-1a hash of both species; see [`pair_hash`].
    pub fn hash(&self) -> u64 {
        pair_hash(self.pair)
    }

    /// Deep-copy into an [`OwnedSnapshot`].
    pub fn to_owned_snapshot(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            pair: self.pair.clone(),
            generation: self.generation,
        }
    }
}

/// Owned copy of one generation, independent of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedSnapshot {
    pair: FieldPair,
    generation: u64,
}

impl OwnedSnapshot {
    /// Borrow as a [`Snapshot`].
    pub fn as_snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.pair, self.generation)
    }

    /// Generation this copy was taken at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take the fields out of the snapshot.
    pub fn into_pair(self) -> FieldPair {
        self.pair
    }
}
