//! Section carousel reducer.

use pinkkush_model::SectionId;

use super::messages::Message;
use super::state::NavigationState;
use crate::messages::{Command, Update};

/// Main message handler for the section carousel.
pub fn handle_message(
    state: &mut NavigationState,
    message: Message,
) -> Update {
    match message {
        Message::GoTo(index) => go_to(state, index),
        Message::ToggleAutoPlay => toggle_auto_play(state),
        Message::AutoAdvanceTick => auto_advance(state),
    }
}

fn go_to(state: &mut NavigationState, index: usize) -> Update {
    let len = SectionId::ALL.len();
    debug_assert!(index < len, "section index {index} out of range 0..{len}");
    state.set_current(index.min(len - 1));

    Update::command(Command::ScrollTo(state.current_section()))
}

fn toggle_auto_play(state: &mut NavigationState) -> Update {
    state.auto_play = !state.auto_play;
    log::debug!(
        "[Navigation] auto-play {}",
        if state.auto_play { "on" } else { "off" }
    );
    Update::none()
}

fn auto_advance(state: &mut NavigationState) -> Update {
    let next = (state.current_index() + 1) % SectionId::ALL.len();
    state.set_current(next);
    log::debug!("[Navigation] auto-advance to {}", state.current_section());

    Update::command(Command::ScrollTo(state.current_section()))
}
