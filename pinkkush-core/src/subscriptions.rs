//! Declarative timer wiring.
//!
//! After every update the runtime asks this module which timers the current
//! state wants and reconciles the armed set against the answer. A timer
//! exists exactly as long as its spec keeps being declared: dropping the
//! auto-play flag undeclares the carousel timer, and a reveal's one-shot
//! spec is keyed by generation so a re-trigger structurally cancels the
//! superseded timer.

use crate::domains::{cure, navigation, sommelier, strain};
use crate::page::PageState;
use crate::primitives::RevealPhase;
use crate::sched::{TimerKey, TimerSpec};

/// Timers the page wants armed for `state`.
pub fn subscriptions(state: &PageState) -> Vec<TimerSpec> {
    let timings = &state.timings;
    let mut specs = vec![
        TimerSpec::repeating(
            TimerKey::CureProgress,
            timings.cure_progress_tick,
            cure::Message::ProgressTick.into(),
        ),
        TimerSpec::repeating(
            TimerKey::ServiceRotate,
            timings.service_rotate,
            sommelier::Message::RotateTick.into(),
        ),
    ];

    if state.navigation.auto_play {
        specs.push(TimerSpec::repeating(
            TimerKey::SectionAutoAdvance,
            timings.section_auto_advance,
            navigation::Message::AutoAdvanceTick.into(),
        ));
    }

    if state.strain.legend.phase() == RevealPhase::Pending {
        let generation = state.strain.legend.generation();
        specs.push(TimerSpec::once(
            TimerKey::LegendSearch(generation),
            timings.legend_search,
            strain::Message::SearchComplete { generation }.into(),
        ));
    }

    if state.sommelier.insight.phase() == RevealPhase::Pending {
        let generation = state.sommelier.insight.generation();
        specs.push(TimerSpec::once(
            TimerKey::InsightGeneration(generation),
            timings.insight_generation,
            sommelier::Message::InsightReady { generation }.into(),
        ));
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Timings;

    #[test]
    fn always_on_timers_are_declared_for_a_fresh_page() {
        let state = PageState::default();
        let keys: Vec<TimerKey> =
            subscriptions(&state).iter().map(|spec| spec.key).collect();

        assert_eq!(
            keys,
            vec![TimerKey::CureProgress, TimerKey::ServiceRotate]
        );
    }

    #[test]
    fn auto_play_declares_the_carousel_timer() {
        let mut state = PageState::new(Timings::default());
        state.navigation.auto_play = true;

        let declared = subscriptions(&state)
            .iter()
            .any(|spec| spec.key == TimerKey::SectionAutoAdvance);
        assert!(declared);
    }

    #[test]
    fn retrigger_changes_the_one_shot_key() {
        let mut state = PageState::default();
        state.sommelier.insight.trigger(0);
        let first_keys: Vec<TimerKey> =
            subscriptions(&state).iter().map(|spec| spec.key).collect();

        state.sommelier.insight.trigger(1);
        let second_keys: Vec<TimerKey> =
            subscriptions(&state).iter().map(|spec| spec.key).collect();

        let first = first_keys
            .iter()
            .find(|key| matches!(key, TimerKey::InsightGeneration(_)));
        let second = second_keys
            .iter()
            .find(|key| matches!(key, TimerKey::InsightGeneration(_)));
        assert_ne!(first, second);
    }
}
