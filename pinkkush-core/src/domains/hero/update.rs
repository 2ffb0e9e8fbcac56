//! Hero reducer.

use super::messages::Message;
use super::state::HeroState;
use crate::messages::Update;

/// Main message handler for the hero section.
pub fn handle_message(state: &mut HeroState, message: Message) -> Update {
    match message {
        Message::PointerMoved {
            x,
            y,
            viewport_width,
            viewport_height,
        } => {
            // A zero-sized viewport can show up transiently during window
            // setup; ignore rather than divide by it.
            if viewport_width > 0.0 && viewport_height > 0.0 {
                state.pointer.x = (x / viewport_width * 100.0).clamp(0.0, 100.0);
                state.pointer.y =
                    (y / viewport_height * 100.0).clamp(0.0, 100.0);
            }
        }
    }

    Update::none()
}
