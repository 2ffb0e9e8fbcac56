//! Shell configuration.
//!
//! Layered the usual way: built-in defaults (the page's canonical cadence),
//! then an optional `pinkkush.toml`, then `PINKKUSH_`-prefixed environment
//! variables. All periods are validated nonzero before they reach the
//! timer layer.

use std::time::Duration;

use config::{Config, Environment, File};
use pinkkush_core::Timings;
use serde::Deserialize;

/// Environment variable prefix, e.g. `PINKKUSH_AUTO_PLAY=true`.
const ENV_PREFIX: &str = "PINKKUSH";

/// Default config file stem, resolved relative to the working directory.
const DEFAULT_FILE: &str = "pinkkush";

/// Errors from loading or validating the shell configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Timer cadence in milliseconds, mapped onto [`Timings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    pub section_auto_advance_ms: u64,
    pub cure_progress_tick_ms: u64,
    pub service_rotate_ms: u64,
    pub legend_search_ms: u64,
    pub insight_generation_ms: u64,
}

impl TimingConfig {
    pub fn to_timings(self) -> Timings {
        Timings {
            section_auto_advance: Duration::from_millis(
                self.section_auto_advance_ms,
            ),
            cure_progress_tick: Duration::from_millis(
                self.cure_progress_tick_ms,
            ),
            service_rotate: Duration::from_millis(self.service_rotate_ms),
            legend_search: Duration::from_millis(self.legend_search_ms),
            insight_generation: Duration::from_millis(
                self.insight_generation_ms,
            ),
        }
    }
}

/// Full shell configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    /// Start the section carousel with auto-advance enabled.
    pub auto_play: bool,
    /// How long the scripted demo keeps the page mounted.
    pub demo_duration_ms: u64,
    pub timings: TimingConfig,
}

impl PageConfig {
    /// Load from defaults, the optional `pinkkush.toml`, and the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_FILE)
    }

    /// Load with an explicit file stem (tests point this at a temp dir).
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let defaults = Timings::default();

        let settings = Config::builder()
            .set_default("auto_play", false)?
            .set_default("demo_duration_ms", 12_000u64)?
            .set_default(
                "timings.section_auto_advance_ms",
                defaults.section_auto_advance.as_millis() as u64,
            )?
            .set_default(
                "timings.cure_progress_tick_ms",
                defaults.cure_progress_tick.as_millis() as u64,
            )?
            .set_default(
                "timings.service_rotate_ms",
                defaults.service_rotate.as_millis() as u64,
            )?
            .set_default(
                "timings.legend_search_ms",
                defaults.legend_search.as_millis() as u64,
            )?
            .set_default(
                "timings.insight_generation_ms",
                defaults.insight_generation.as_millis() as u64,
            )?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: PageConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("timings.section_auto_advance_ms", self.timings.section_auto_advance_ms),
            ("timings.cure_progress_tick_ms", self.timings.cure_progress_tick_ms),
            ("timings.service_rotate_ms", self.timings.service_rotate_ms),
            ("timings.legend_search_ms", self.timings.legend_search_ms),
            ("timings.insight_generation_ms", self.timings.insight_generation_ms),
        ];

        for (key, value) in periods {
            if value == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be nonzero"
                )));
            }
        }

        Ok(())
    }
}
