//! Growth-journey domain.
//!
//! A purely user-driven stepper over the four growth stages. No timers.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::GrowthState;

use crate::messages::Update;

/// Update growth-journey state.
pub fn update(state: &mut GrowthState, message: Message) -> Update {
    update::handle_message(state, message)
}
