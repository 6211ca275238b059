//! Per-advance performance metrics.
//!
//! [`StepMetrics`] captures timing for one [`Simulation::advance`](crate::Simulation::advance)
//! call, for frame-budget decisions in the driving loop.

/// Timing collected during one `advance` call.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Sub-steps applied by this call.
    pub substeps: u32,
    /// Wall-clock time for the whole call.
    pub total_us: u64,
    /// Longest single sub-step.
    pub slowest_substep_us: u64,
    /// Generation published at the end of the call.
    pub generation: u64,
}

impl StepMetrics {
    /// Mean sub-step time, or 0 when no sub-step ran.
    pub fn mean_substep_us(&self) -> u64 {
        if self.substeps == 0 {
            0
        } else {
            self.total_us / u64::from(self.substeps)
        }
    }
}
