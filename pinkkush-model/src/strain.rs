//! Strain facts and the legend copy revealed by the uncover flow.

/// One headline characteristic of the strain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrainCharacteristic {
    pub title: &'static str,
    /// Short display value, e.g. a ratio or a percentage range.
    pub value: &'static str,
    pub description: &'static str,
}

/// One entry of the quick-stats strip shown once the legend is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrainQuickStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The canned archive-lookup result for the uncover flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrainLegend {
    pub title: &'static str,
    pub story: &'static str,
}

pub static STRAIN_CHARACTERISTICS: [StrainCharacteristic; 3] = [
    StrainCharacteristic {
        title: "Indica Dominant",
        value: "80/20",
        description: "80% Indica, 20% Sativa hybrid for deep relaxation",
    },
    StrainCharacteristic {
        title: "THC Content",
        value: "20-25%",
        description: "High potency with balanced cannabinoid profile",
    },
    StrainCharacteristic {
        title: "Terpenes",
        value: "Premium",
        description: "Rich in myrcene, limonene, and caryophyllene",
    },
];

pub static STRAIN_EFFECTS: [&str; 5] = [
    "Deep Physical Relaxation",
    "Stress Relief",
    "Sleep Enhancement",
    "Pain Management",
    "Mood Elevation",
];

pub static STRAIN_QUICK_STATS: [StrainQuickStat; 4] = [
    StrainQuickStat {
        value: "BC",
        label: "Origin",
    },
    StrainQuickStat {
        value: "Indica",
        label: "Type",
    },
    StrainQuickStat {
        value: "Evening",
        label: "Best Time",
    },
    StrainQuickStat {
        value: "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}",
        label: "Rating",
    },
];

/// There is exactly one legend; the reveal flow resolves to it regardless
/// of trigger index.
pub static STRAIN_LEGEND: StrainLegend = StrainLegend {
    title: "Pink Kush Coastal Legacy",
    story: "Born from the misty coastlines of British Columbia, Pink Kush \
            represents decades of careful cultivation and genetic \
            refinement. This indica-dominant hybrid has earned its \
            reputation through consistent quality, potent effects, and the \
            distinctive pink hairs that crown each mature bud.",
};
