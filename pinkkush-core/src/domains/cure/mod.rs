//! Curing-room domain.
//!
//! Two independent cursors: a 100ms-tick progress counter cycling over
//! 0..=100 that lights up the process checklist, and a user-driven picker
//! over the four environmental metrics.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::CureState;

use crate::messages::Update;

/// Update curing-room state.
pub fn update(state: &mut CureState, message: Message) -> Update {
    update::handle_message(state, message)
}
