//! Content model shared across Pink Kush crates.
//!
//! Everything in this crate is compile-time constant data: the ordered
//! section list and the copy shown by each section. The behavioral layer in
//! `pinkkush-core` indexes into these tables; it never mutates them.

pub mod cure;
pub mod growth;
pub mod sections;
pub mod sommelier;
pub mod strain;

// Intentionally curated re-exports for downstream consumers.
pub use cure::{CURE_METRICS, CURE_STEPS, CureMetric};
pub use growth::{GROWTH_STAGES, GrowthStage};
pub use sections::SectionId;
pub use sommelier::{
    SOMMELIER_INSIGHTS, SOMMELIER_SERVICES, SommelierInsight, SommelierService,
};
pub use strain::{
    STRAIN_CHARACTERISTICS, STRAIN_EFFECTS, STRAIN_LEGEND, STRAIN_QUICK_STATS,
    StrainCharacteristic, StrainLegend, StrainQuickStat,
};
