//! Section carousel domain.
//!
//! Owns which of the five sections is active, the auto-play toggle, and
//! the scroll-sync side effect. The 8-second auto-advance timer is declared
//! in [`crate::subscriptions`] whenever auto-play is on; turning auto-play
//! off undeclares it, and re-enabling arms a fresh timer with no memory of
//! the prior phase.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::NavigationState;

use crate::messages::Update;

/// Update navigation state.
pub fn update(state: &mut NavigationState, message: Message) -> Update {
    update::handle_message(state, message)
}
