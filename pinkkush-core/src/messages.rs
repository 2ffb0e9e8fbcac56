//! Page-level message routing and reducer outputs.

use pinkkush_model::SectionId;

use crate::domains::{cure, growth, hero, navigation, sommelier, strain};

/// The main page message router.
///
/// Everything that can change state funnels through here: user actions
/// injected by the host, pointer events, and timer fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageMessage {
    /// Section carousel domain.
    Navigation(navigation::Message),

    /// Growth-journey domain.
    Growth(growth::Message),

    /// Curing-room domain.
    Cure(cure::Message),

    /// Strain-legend domain.
    Strain(strain::Message),

    /// Digital-sommelier domain.
    Sommelier(sommelier::Message),

    /// Hero domain.
    Hero(hero::Message),
}

// Automatic routing from domain messages
impl From<navigation::Message> for PageMessage {
    fn from(message: navigation::Message) -> Self {
        PageMessage::Navigation(message)
    }
}

impl From<growth::Message> for PageMessage {
    fn from(message: growth::Message) -> Self {
        PageMessage::Growth(message)
    }
}

impl From<cure::Message> for PageMessage {
    fn from(message: cure::Message) -> Self {
        PageMessage::Cure(message)
    }
}

impl From<strain::Message> for PageMessage {
    fn from(message: strain::Message) -> Self {
        PageMessage::Strain(message)
    }
}

impl From<sommelier::Message> for PageMessage {
    fn from(message: sommelier::Message) -> Self {
        PageMessage::Sommelier(message)
    }
}

impl From<hero::Message> for PageMessage {
    fn from(message: hero::Message) -> Self {
        PageMessage::Hero(message)
    }
}

impl PageMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigation(message) => message.name(),
            Self::Growth(message) => message.name(),
            Self::Cure(message) => message.name(),
            Self::Strain(message) => message.name(),
            Self::Sommelier(message) => message.name(),
            Self::Hero(message) => message.name(),
        }
    }
}

/// Host side effect requested by a reducer.
///
/// Reducers stay pure; the runtime interprets commands against the host
/// collaborators after the state transition is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Bring the given section into view.
    ScrollTo(SectionId),
}

/// Result of a domain update operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// Side effects for the host, in request order.
    pub commands: Vec<Command>,
}

impl Update {
    /// An update with no side effects.
    pub fn none() -> Self {
        Self::default()
    }

    /// An update with a single side effect.
    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
