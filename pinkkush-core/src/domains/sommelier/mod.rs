//! Digital-sommelier domain.
//!
//! A 4-second service rotator plus the "Generate Insight" reveal flow with
//! a 3.5-second simulated generation delay. Requesting an insight selects
//! its service card, but the rotator keeps ticking while the request is
//! pending; the eventual result is keyed by the index recorded at trigger
//! time, not by wherever the rotator has moved since.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::SommelierState;

use crate::messages::Update;

/// Update digital-sommelier state.
pub fn update(state: &mut SommelierState, message: Message) -> Update {
    update::handle_message(state, message)
}
