//! Watch configuration: the immutable settings the polling engine runs with.
//!
//! Constructed once at startup (from CLI flags / environment variables) and
//! validated here so the constraints are unit-testable without touching
//! process state.

use std::time::Duration;

use thiserror::Error;

/// The shortest poll interval the engine accepts.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Everything a watch run needs to know, fixed for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Postal code the store search is centred on.
    pub zip: String,
    /// Store search radius in miles.
    pub radius_miles: u32,
    /// Delay between poll cycles.
    pub poll_interval: Duration,
    /// Keep polling after a cycle finds open slots instead of stopping.
    pub continue_on_success: bool,
    /// Per-request timeout for the provider client, in seconds.
    pub request_timeout_secs: u64,
}

/// A startup setting that is missing or out of range.
///
/// These are reported before the engine starts and are never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("postal code must not be empty")]
    EmptyZip,

    #[error("search radius must be greater than 0 mile(s)")]
    ZeroRadius,

    #[error("poll interval must be at least one minute, got {0} second(s)")]
    IntervalTooShort(u64),
}

impl WatchConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the postal code is empty, the radius is
    /// zero, or the poll interval is under one minute.
    pub fn new(
        zip: impl Into<String>,
        radius_miles: u32,
        poll_interval: Duration,
        continue_on_success: bool,
        request_timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            zip: zip.into(),
            radius_miles,
            poll_interval,
            continue_on_success,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zip.trim().is_empty() {
            return Err(ConfigError::EmptyZip);
        }
        if self.radius_miles == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if self.poll_interval < MIN_POLL_INTERVAL {
            return Err(ConfigError::IntervalTooShort(self.poll_interval.as_secs()));
        }
        Ok(())
    }
}
