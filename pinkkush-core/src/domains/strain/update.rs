//! Strain-legend reducer.

use super::messages::Message;
use super::state::StrainState;
use crate::messages::Update;

/// Main message handler for the uncover-legend interaction.
pub fn handle_message(state: &mut StrainState, message: Message) -> Update {
    match message {
        Message::Uncover => {
            let generation = state.legend.trigger(0);
            log::debug!(
                "[Strain] searching the archives (generation {generation})"
            );
        }
        Message::SearchComplete { generation } => {
            if state.legend.resolve(generation) {
                log::debug!("[Strain] legend revealed");
            }
        }
        Message::AskAgain => state.legend.reset(),
    }

    Update::none()
}
