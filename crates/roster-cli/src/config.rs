//! Settings resolved from the environment.
//!
//! Only the reveal delays, the RNG seed and the output format can be
//! overridden; the pool and the draw count are fixed.

use std::time::Duration;

use roster_core::rng::SystemRng;
use roster_draw::domain::config::DrawConfig;

use crate::error::AppError;

/// Overrides the pre-roll delay, in milliseconds.
pub const PRE_ROLL_VAR: &str = "ROSTER_PRE_ROLL_MS";
/// Overrides the per-step reveal delay, in milliseconds.
pub const STEP_VAR: &str = "ROSTER_STEP_MS";
/// Overrides the delay after the last reveal, in milliseconds.
pub const FINISH_VAR: &str = "ROSTER_FINISH_MS";
/// Seeds the RNG so a session's draws can be replayed.
pub const SEED_VAR: &str = "ROSTER_SEED";
/// Selects the output format: `text` or `json`.
pub const OUTPUT_VAR: &str = "ROSTER_OUTPUT";

/// How draw events are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Localized dialogs and the number grid.
    #[default]
    Text,
    /// One JSON event envelope per line.
    Json,
}

/// Resolved settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Draw parameters.
    pub draw: DrawConfig,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Output format.
    pub output: OutputFormat,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to the defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = DrawConfig::default();
        let draw = defaults.with_delays(
            millis(&lookup, PRE_ROLL_VAR, defaults.pre_roll)?,
            millis(&lookup, STEP_VAR, defaults.per_step)?,
            millis(&lookup, FINISH_VAR, defaults.finish_delay)?,
        );

        let seed = match lookup(SEED_VAR) {
            None => None,
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!(
                    "{SEED_VAR} must be an unsigned integer, got `{raw}`: {e}"
                ))
            })?),
        };

        let output = match lookup(OUTPUT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{OUTPUT_VAR} must be `text` or `json`, got `{other}`"
                )));
            }
        };

        Ok(Self { draw, seed, output })
    }

    /// Builds the RNG the session draws from.
    #[must_use]
    pub fn rng(&self) -> SystemRng {
        match self.seed {
            Some(seed) => SystemRng::seeded(seed),
            None => SystemRng::from_os(),
        }
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration, AppError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| {
                AppError::Config(format!(
                    "{key} must be a whole number of milliseconds, got `{raw}`: {e}"
                ))
            }),
    }
}
