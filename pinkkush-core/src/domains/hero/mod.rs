//! Hero domain.
//!
//! Tracks the pointer as viewport percentages; the render host feeds raw
//! pointer/viewport coordinates and reads back the normalized position for
//! the radial-gradient treatment.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::HeroState;

use crate::messages::Update;

/// Update hero state.
pub fn update(state: &mut HeroState, message: Message) -> Update {
    update::handle_message(state, message)
}
