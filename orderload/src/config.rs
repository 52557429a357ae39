use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

/// Run configuration for a load test
///
/// Two knobs, matching the harness options: how many virtual users run in
/// parallel and how long the run lasts. Both invariants (`vus >= 1`,
/// `duration > 0`) are enforced at construction; the config is read-only
/// once the run starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub name: String,
    pub vus: NonZeroU32,
    pub duration: Duration,
}

impl RunConfig {
    pub fn new(name: &str, vus: NonZeroU32, duration: Duration) -> Result<Self, ConfigError> {
        if duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }

        Ok(Self {
            name: name.to_string(),
            vus,
            duration,
        })
    }

    /// Builds a config from the harness's raw values, with the duration in
    /// the usual string form (`"300s"`, `"5m"`).
    pub fn parse(name: &str, vus: u32, duration: &str) -> Result<Self, ConfigError> {
        let vus = NonZeroU32::new(vus).ok_or(ConfigError::ZeroVus)?;
        let duration = humantime::parse_duration(duration)?;
        Self::new(name, vus, duration)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("virtual user count must be at least 1")]
    ZeroVus,
    #[error("run duration must be greater than zero")]
    ZeroDuration,
    #[error("invalid duration string: {0}")]
    InvalidDuration(#[from] humantime::DurationError),
}
