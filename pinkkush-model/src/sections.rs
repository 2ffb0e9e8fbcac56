//! The ordered, fixed list of top-level page sections.

use std::fmt::{self, Display};

/// Stable identifier for one full-viewport panel of the page.
///
/// The declaration order is the scroll order; it is immutable for the
/// session and everything that cycles or clamps over sections derives its
/// length from [`SectionId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SectionId {
    Hero,
    Growth,
    Cure,
    PinkKush,
    Legacy,
}

impl SectionId {
    /// All sections in scroll order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Growth,
        SectionId::Cure,
        SectionId::PinkKush,
        SectionId::Legacy,
    ];

    /// The anchor id the scroll collaborator resolves.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Growth => "growth",
            SectionId::Cure => "cure",
            SectionId::PinkKush => "pinkkush",
            SectionId::Legacy => "legacy",
        }
    }

    /// Position of this section in scroll order.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Section at `index` in scroll order.
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
