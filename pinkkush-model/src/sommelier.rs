//! Digital-sommelier services and their precomputed results.
//!
//! The "AI" output is a fixed string chosen at build time: each service
//! index maps to exactly one insight. No generation happens anywhere.

/// One sommelier service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SommelierService {
    pub title: &'static str,
    pub description: &'static str,
}

/// Precomputed insight content, keyed by service index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SommelierInsight {
    pub title: &'static str,
    pub content: &'static str,
}

pub static SOMMELIER_SERVICES: [SommelierService; 3] = [
    SommelierService {
        title: "Discover its Terpene Profile",
        description: "AI-powered analysis of aromatic compounds and their \
                      effects",
    },
    SommelierService {
        title: "Suggest a Pairing",
        description: "Personalized recommendations for activities and \
                      occasions",
    },
    SommelierService {
        title: "Craft Your Story",
        description: "Generate a unique narrative about your experience",
    },
];

/// Index-aligned with [`SOMMELIER_SERVICES`].
pub static SOMMELIER_INSIGHTS: [SommelierInsight; 3] = [
    SommelierInsight {
        title: "Terpene Profile Analysis",
        content: "Dominant: Myrcene (40%) - Deeply relaxing, sedative \
                  effects. Limonene (25%) - Mood elevation, stress relief. \
                  Caryophyllene (20%) - Anti-inflammatory, pain management. \
                  This profile creates the signature Pink Kush experience \
                  of profound relaxation with gentle euphoria.",
    },
    SommelierInsight {
        title: "Perfect Pairing Suggestions",
        content: "Evening unwind ritual with herbal tea and soft ambient \
                  music. Ideal for meditation, gentle yoga, or creative \
                  journaling. Pairs beautifully with lavender aromatherapy \
                  and cozy blankets. Best enjoyed during golden hour or \
                  under starlit skies.",
    },
    SommelierInsight {
        title: "Your Pink Kush Story",
        content: "Like finding a hidden coastal trail that leads to perfect \
                  solitude, Pink Kush guides you to your own secret \
                  sanctuary. Each draw is a step deeper into tranquility, \
                  where time moves like ocean waves\u{2014}rhythmic, \
                  peaceful, inevitable. This is not just relaxation; it's a \
                  homecoming to yourself.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_an_insight() {
        assert_eq!(SOMMELIER_SERVICES.len(), SOMMELIER_INSIGHTS.len());
    }
}
