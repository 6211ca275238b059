//! Double-buffered field storage.
//!
//! [`DoubleBuffer`] holds two [`FieldPair`]s that alternate between the
//! "published" (readable) and "staging" (writable) roles. A step reads
//! only the published pair and writes only the staging pair; publishing
//! swaps the roles. There is no way to read the staging pair from outside,
//! so a partially written generation is never observable.
//!
//! ```text
//! buffers[published]      ←── readers, step input
//! buffers[1 - published]  ←── step output, becomes published on swap
//! ```

use morphogen_core::FieldPair;

/// Ping-pong pair of [`FieldPair`] buffers with a generation counter.
#[derive(Clone, Debug)]
pub struct DoubleBuffer {
    buffers: [FieldPair; 2],
    published: usize,
    generation: u64,
}

impl DoubleBuffer {
    /// Publish `initial` as generation 0.
    ///
    /// The staging buffer starts as a copy so both buffers share dimensions.
    pub fn new(initial: FieldPair) -> Self {
        let staging = initial.clone();
        Self {
            buffers: [initial, staging],
            published: 0,
            generation: 0,
        }
    }

    /// The current generation, read-only.
    pub fn published(&self) -> &FieldPair {
        &self.buffers[self.published]
    }

    /// Number of publishes since construction or the last [`reset`](Self::reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation and publish it.
    ///
    /// `compute` receives the published pair and the staging pair. It must
    /// overwrite every staging value. The swap happens only after `compute`
    /// returns.
    pub fn advance_with<F>(&mut self, compute: F)
    where
        F: FnOnce(&FieldPair, &mut FieldPair),
    {
        let (first, second) = self.buffers.split_at_mut(1);
        let (front, back) = if self.published == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };
        compute(front, back);
        self.publish();
    }

    fn publish(&mut self) {
        self.published = 1 - self.published;
        self.generation += 1;
    }

    /// Rewrite the published pair in place and restart at generation 0.
    ///
    /// Used for (re)seeding, which happens outside any step.
    pub fn reset<F>(&mut self, init: F)
    where
        F: FnOnce(&mut FieldPair),
    {
        init(&mut self.buffers[self.published]);
        self.generation = 0;
    }
}
