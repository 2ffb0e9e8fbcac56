//! Aggregate page state and the render snapshot.

use std::time::Duration;

use pinkkush_model::SectionId;
use serde::Serialize;

use crate::domains::cure::CureState;
use crate::domains::growth::GrowthState;
use crate::domains::hero::HeroState;
use crate::domains::navigation::NavigationState;
use crate::domains::sommelier::SommelierState;
use crate::domains::strain::StrainState;

/// Timer periods and artificial latencies.
///
/// Defaults match the page's canonical cadence; the shell may shorten them
/// (demo runs) but the relationships are fixed: reveals are one-shot,
/// everything else repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Section carousel auto-advance period.
    pub section_auto_advance: Duration,
    /// Cure progress-counter tick.
    pub cure_progress_tick: Duration,
    /// Sommelier service-highlight rotation period.
    pub service_rotate: Duration,
    /// Simulated archive-search latency for the legend.
    pub legend_search: Duration,
    /// Simulated generation latency for sommelier insights.
    pub insight_generation: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            section_auto_advance: Duration::from_millis(8000),
            cure_progress_tick: Duration::from_millis(100),
            service_rotate: Duration::from_millis(4000),
            legend_search: Duration::from_millis(3000),
            insight_generation: Duration::from_millis(3500),
        }
    }
}

/// All per-section state machines plus the timing table.
///
/// Instances share nothing: each domain is exclusively owned here and only
/// the root reducer mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageState {
    pub timings: Timings,
    pub navigation: NavigationState,
    pub growth: GrowthState,
    pub cure: CureState,
    pub strain: StrainState,
    pub sommelier: SommelierState,
    pub hero: HeroState,
}

impl PageState {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            navigation: NavigationState::new(),
            growth: GrowthState::new(),
            cure: CureState::new(),
            strain: StrainState::new(),
            sommelier: SommelierState::new(),
            hero: HeroState::new(),
        }
    }

    /// Flat view of everything a render host needs this frame.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            section: self.navigation.current_section(),
            section_progress: self.navigation.progress(),
            auto_play: self.navigation.auto_play,
            growth_stage: self.growth.active_stage().id,
            cure_progress: self.cure.progress_percent(),
            cure_day: self.cure.batch_day(),
            active_metric: self.cure.active_metric().label,
            legend_phase: self.strain.phase().as_str(),
            active_service: self.sommelier.active_service_index(),
            insight_phase: self.sommelier.insight.phase().as_str(),
            insight_title: self
                .sommelier
                .revealed_insight()
                .map(|insight| insight.title),
            pointer: (self.hero.pointer.x, self.hero.pointer.y),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

/// Serializable per-frame view of the page, for hosts and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub section: SectionId,
    pub section_progress: f32,
    pub auto_play: bool,
    pub growth_stage: &'static str,
    pub cure_progress: u8,
    pub cure_day: usize,
    pub active_metric: &'static str,
    pub legend_phase: &'static str,
    pub active_service: usize,
    pub insight_phase: &'static str,
    pub insight_title: Option<&'static str>,
    pub pointer: (f32, f32),
}
