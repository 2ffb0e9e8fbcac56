//! Growth-journey reducer.

use super::messages::Message;
use super::state::GrowthState;
use crate::messages::Update;

/// Main message handler for the growth-stage viewer.
pub fn handle_message(state: &mut GrowthState, message: Message) -> Update {
    match message {
        Message::NextStage => state.stages.next(),
        Message::PreviousStage => state.stages.prev(),
        Message::SelectStage(index) => state.stages.select(index),
    }

    Update::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinkkush_model::GROWTH_STAGES;

    #[test]
    fn next_clamps_at_harvest() {
        let mut state = GrowthState::new();
        for _ in 0..GROWTH_STAGES.len() + 2 {
            handle_message(&mut state, Message::NextStage);
        }

        assert!(state.at_last_stage());
        assert_eq!(state.active_stage().id, "harvest");
    }

    #[test]
    fn previous_clamps_at_germination() {
        let mut state = GrowthState::new();
        handle_message(&mut state, Message::PreviousStage);

        assert!(state.at_first_stage());
        assert_eq!(state.active_stage().id, "germination");
    }

    #[test]
    fn select_jumps_directly() {
        let mut state = GrowthState::new();
        handle_message(&mut state, Message::SelectStage(2));

        assert_eq!(state.active_stage().id, "flowering");
    }
}
