//! Growth-journey stages, stepped through by the growth section.

/// One stage of the seed-to-harvest timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrowthStage {
    /// Stable id used by render hosts to key stage widgets.
    pub id: &'static str,
    pub title: &'static str,
    /// One-line tagline under the stage title.
    pub tagline: &'static str,
    /// Long-form copy for the active-stage panel.
    pub details: &'static str,
}

/// The four growth stages in chronological order.
pub static GROWTH_STAGES: [GrowthStage; 4] = [
    GrowthStage {
        id: "germination",
        title: "Germination",
        tagline: "Life awakens from dormancy.",
        details: "The seed breaks its shell, revealing the first tender \
                  roots and shoots. This magical moment marks the beginning \
                  of our journey from potential to reality.",
    },
    GrowthStage {
        id: "vegetative",
        title: "Vegetative",
        tagline: "Building strength, reaching for light.",
        details: "Rapid growth and development as the plant establishes its \
                  foundation. Strong stems and lush leaves prepare for the \
                  flowering stage ahead.",
    },
    GrowthStage {
        id: "flowering",
        title: "Flowering",
        tagline: "The plant reveals its true character.",
        details: "The most critical phase where the plant's unique traits \
                  emerge. Delicate flowers form, carrying the essence that \
                  will define our final product.",
    },
    GrowthStage {
        id: "harvest",
        title: "Harvest",
        tagline: "The culmination of patience and care.",
        details: "The perfect moment when months of dedication are rewarded. \
                  Each plant is carefully harvested at peak potency and \
                  flavor development.",
    },
];
