//! Strain-legend state.

use pinkkush_model::{
    STRAIN_CHARACTERISTICS, STRAIN_EFFECTS, STRAIN_LEGEND, STRAIN_QUICK_STATS,
    StrainCharacteristic, StrainLegend, StrainQuickStat,
};

use crate::primitives::{RevealFlow, RevealPhase};

/// Uncover-legend interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrainState {
    pub legend: RevealFlow,
}

impl StrainState {
    pub fn new() -> Self {
        Self {
            // One canned result: the legend itself.
            legend: RevealFlow::new(1),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.legend.phase()
    }

    /// Whether the shimmer/"Searching the archives..." treatment is active.
    pub fn searching(&self) -> bool {
        self.legend.phase() == RevealPhase::Pending
    }

    /// The legend, once revealed.
    pub fn revealed_legend(&self) -> Option<&'static StrainLegend> {
        (self.legend.phase() == RevealPhase::Revealed)
            .then_some(&STRAIN_LEGEND)
    }

    /// Characteristic cards, shown only alongside the revealed legend.
    pub fn characteristics(&self) -> Option<&'static [StrainCharacteristic]> {
        (self.legend.phase() == RevealPhase::Revealed)
            .then_some(&STRAIN_CHARACTERISTICS[..])
    }

    /// Effect badges, shown only alongside the revealed legend.
    pub fn effects(&self) -> Option<&'static [&'static str]> {
        (self.legend.phase() == RevealPhase::Revealed)
            .then_some(&STRAIN_EFFECTS[..])
    }

    /// Quick-stats strip, shown only alongside the revealed legend.
    pub fn quick_stats(&self) -> Option<&'static [StrainQuickStat]> {
        (self.legend.phase() == RevealPhase::Revealed)
            .then_some(&STRAIN_QUICK_STATS[..])
    }
}

impl Default for StrainState {
    fn default() -> Self {
        Self::new()
    }
}
