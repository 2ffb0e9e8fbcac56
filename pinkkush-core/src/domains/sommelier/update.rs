//! Digital-sommelier reducer.

use super::messages::Message;
use super::state::SommelierState;
use crate::messages::Update;

/// Main message handler for the sommelier section.
pub fn handle_message(
    state: &mut SommelierState,
    message: Message,
) -> Update {
    match message {
        Message::RotateTick => state.services.tick(),
        Message::SelectService(index) => state.services.select(index),
        Message::RequestInsight(index) => {
            // Requesting also highlights the service card.
            state.services.select(index);
            let generation = state.insight.trigger(index);
            log::debug!(
                "[Sommelier] crafting insight {index} \
                 (generation {generation})"
            );
        }
        Message::InsightReady { generation } => {
            if state.insight.resolve(generation) {
                log::debug!(
                    "[Sommelier] insight {} revealed",
                    state.insight.selected()
                );
            }
        }
        Message::AskAgain => state.insight.reset(),
    }

    Update::none()
}
