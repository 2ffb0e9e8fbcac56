//! Digital-sommelier messages.

/// Messages for the sommelier section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// 4-second service-highlight fire.
    RotateTick,
    /// Highlight the service dot at `index` without starting a request.
    SelectService(usize),
    /// User asked for an insight on the service at `index`.
    RequestInsight(usize),
    /// Generation timer fired for `generation`.
    InsightReady { generation: u64 },
    /// User pressed "Ask Again" on the result panel.
    AskAgain,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RotateTick => "Sommelier::RotateTick",
            Self::SelectService(_) => "Sommelier::SelectService",
            Self::RequestInsight(_) => "Sommelier::RequestInsight",
            Self::InsightReady { .. } => "Sommelier::InsightReady",
            Self::AskAgain => "Sommelier::AskAgain",
        }
    }
}
