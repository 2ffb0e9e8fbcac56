//! Growth-journey state.

use pinkkush_model::{GROWTH_STAGES, GrowthStage};

use crate::primitives::BoundedStepper;

/// Stage viewer over the fixed growth timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthState {
    pub stages: BoundedStepper,
}

impl GrowthState {
    pub fn new() -> Self {
        Self {
            stages: BoundedStepper::new(GROWTH_STAGES.len()),
        }
    }

    pub fn active_index(&self) -> usize {
        self.stages.active()
    }

    pub fn active_stage(&self) -> &'static GrowthStage {
        &GROWTH_STAGES[self.stages.active()]
    }

    /// Whether the "Previous" control should be disabled.
    pub fn at_first_stage(&self) -> bool {
        self.stages.at_start()
    }

    /// Whether the "Next Stage" control should be disabled.
    pub fn at_last_stage(&self) -> bool {
        self.stages.at_end()
    }
}

impl Default for GrowthState {
    fn default() -> Self {
        Self::new()
    }
}
