//! Strain-legend domain.
//!
//! The "Uncover Legend" interaction: a single-entry reveal flow with a
//! 3-second simulated archive search. The legend copy, characteristics,
//! effects, and quick stats all come from the content catalog.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::StrainState;

use crate::messages::Update;

/// Update strain-legend state.
pub fn update(state: &mut StrainState, message: Message) -> Update {
    update::handle_message(state, message)
}
