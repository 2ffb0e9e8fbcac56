//! Strain-legend messages.

/// Messages for the uncover-legend interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// User pressed "Uncover Legend".
    Uncover,
    /// Archive-search timer fired for `generation`.
    SearchComplete { generation: u64 },
    /// User pressed "Ask Again" on the revealed panel.
    AskAgain,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uncover => "Strain::Uncover",
            Self::SearchComplete { .. } => "Strain::SearchComplete",
            Self::AskAgain => "Strain::AskAgain",
        }
    }
}
