//! Root reducer: routes page messages to their owning domain.

use crate::domains::{cure, growth, hero, navigation, sommelier, strain};
use crate::messages::{PageMessage, Update};
use crate::page::PageState;

/// Apply one message to the page, returning the host side effects it
/// requested.
pub fn update(state: &mut PageState, message: PageMessage) -> Update {
    match message {
        PageMessage::Navigation(message) => {
            navigation::update(&mut state.navigation, message)
        }
        PageMessage::Growth(message) => {
            growth::update(&mut state.growth, message)
        }
        PageMessage::Cure(message) => cure::update(&mut state.cure, message),
        PageMessage::Strain(message) => {
            strain::update(&mut state.strain, message)
        }
        PageMessage::Sommelier(message) => {
            sommelier::update(&mut state.sommelier, message)
        }
        PageMessage::Hero(message) => hero::update(&mut state.hero, message),
    }
}
