//! Curing-room state.

use pinkkush_model::{CURE_METRICS, CURE_STEPS, CureMetric};

use crate::primitives::{BoundedStepper, CyclicRotator};

/// Progress values run 0..=100 before wrapping.
const PROGRESS_STEPS: usize = 101;

/// Days shown in the "Day X of N" batch caption.
const BATCH_DAYS: usize = 21;

/// Curing section state: the looping batch progress and the metric picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CureState {
    pub progress: CyclicRotator,
    pub metric: BoundedStepper,
}

impl CureState {
    pub fn new() -> Self {
        Self {
            progress: CyclicRotator::new(PROGRESS_STEPS),
            metric: BoundedStepper::new(CURE_METRICS.len()),
        }
    }

    /// Progress-bar value in percent.
    pub fn progress_percent(&self) -> u8 {
        self.progress.active() as u8
    }

    /// Day number for the "Day X of 21" caption.
    pub fn batch_day(&self) -> usize {
        self.progress.active() / 5
    }

    pub fn batch_days_total(&self) -> usize {
        BATCH_DAYS
    }

    /// Whether checklist step `index` has lit up at the current progress.
    pub fn step_completed(&self, index: usize) -> bool {
        index <= self.progress.active() / 16
    }

    /// Number of checklist steps currently lit.
    pub fn completed_steps(&self) -> usize {
        (0..CURE_STEPS.len())
            .filter(|index| self.step_completed(*index))
            .count()
    }

    pub fn active_metric_index(&self) -> usize {
        self.metric.active()
    }

    pub fn active_metric(&self) -> &'static CureMetric {
        &CURE_METRICS[self.metric.active()]
    }
}

impl Default for CureState {
    fn default() -> Self {
        Self::new()
    }
}
