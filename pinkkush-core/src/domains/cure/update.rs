//! Curing-room reducer.

use super::messages::Message;
use super::state::CureState;
use crate::messages::Update;

/// Main message handler for the curing section.
pub fn handle_message(state: &mut CureState, message: Message) -> Update {
    match message {
        Message::ProgressTick => state.progress.tick(),
        Message::SelectMetric(index) => state.metric.select(index),
    }

    Update::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(times: usize) -> CureState {
        let mut state = CureState::new();
        for _ in 0..times {
            handle_message(&mut state, Message::ProgressTick);
        }
        state
    }

    #[test]
    fn progress_wraps_after_one_hundred() {
        let state = ticked(101);
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn batch_day_tracks_progress() {
        assert_eq!(ticked(0).batch_day(), 0);
        assert_eq!(ticked(54).batch_day(), 10);
        assert_eq!(ticked(100).batch_day(), 20);
    }

    #[test]
    fn checklist_lights_up_step_by_step() {
        let start = ticked(0);
        assert_eq!(start.completed_steps(), 1);

        let midway = ticked(50);
        assert!(midway.step_completed(3));
        assert!(!midway.step_completed(4));

        let done = ticked(100);
        assert_eq!(done.completed_steps(), 6);
    }

    #[test]
    fn metric_picker_is_independent_of_progress() {
        let mut state = CureState::new();
        handle_message(&mut state, Message::SelectMetric(2));
        handle_message(&mut state, Message::ProgressTick);

        assert_eq!(state.active_metric().label, "Airflow");
        assert_eq!(state.progress_percent(), 1);
    }
}
