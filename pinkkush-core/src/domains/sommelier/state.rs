//! Digital-sommelier state.

use pinkkush_model::{
    SOMMELIER_INSIGHTS, SOMMELIER_SERVICES, SommelierInsight, SommelierService,
};

use crate::primitives::{CyclicRotator, RevealFlow, RevealPhase};

/// Sommelier section state: the service highlight and the insight flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SommelierState {
    pub services: CyclicRotator,
    pub insight: RevealFlow,
}

impl SommelierState {
    pub fn new() -> Self {
        Self {
            services: CyclicRotator::new(SOMMELIER_SERVICES.len()),
            insight: RevealFlow::new(SOMMELIER_INSIGHTS.len()),
        }
    }

    pub fn active_service_index(&self) -> usize {
        self.services.active()
    }

    pub fn active_service(&self) -> &'static SommelierService {
        &SOMMELIER_SERVICES[self.services.active()]
    }

    /// Whether the "crafting your description..." treatment is active.
    pub fn generating(&self) -> bool {
        self.insight.phase() == RevealPhase::Pending
    }

    /// The canned result for the request recorded at trigger time.
    pub fn revealed_insight(&self) -> Option<&'static SommelierInsight> {
        (self.insight.phase() == RevealPhase::Revealed)
            .then(|| &SOMMELIER_INSIGHTS[self.insight.selected()])
    }
}

impl Default for SommelierState {
    fn default() -> Self {
        Self::new()
    }
}
