//! Curing-room metrics and process checklist for the cure section.

/// One environmental metric shown in the curing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CureMetric {
    pub label: &'static str,
    /// Display value, e.g. a range or a qualitative setting.
    pub value: &'static str,
    pub description: &'static str,
}

/// The four curing metrics, in grid order.
pub static CURE_METRICS: [CureMetric; 4] = [
    CureMetric {
        label: "Temperature",
        value: "18-21\u{b0}C",
        description: "Optimal temperature range for preserving terpenes and \
                      preventing mold",
    },
    CureMetric {
        label: "Humidity",
        value: "55-62%",
        description: "Perfect moisture level for gradual drying without \
                      overdrying",
    },
    CureMetric {
        label: "Airflow",
        value: "Gentle",
        description: "Controlled circulation to ensure even drying \
                      throughout",
    },
    CureMetric {
        label: "Duration",
        value: "14-21 days",
        description: "Patient curing process for maximum potency and flavor \
                      development",
    },
];

/// Ordered curing checklist; step `i` lights up as the progress counter
/// passes `i * 16`.
pub static CURE_STEPS: [&str; 6] = [
    "Harvest at peak trichome development",
    "Trim and prepare for hanging",
    "Hang dry in controlled environment",
    "Monitor temperature and humidity",
    "Jar cure for final development",
    "Quality test and approval",
];
