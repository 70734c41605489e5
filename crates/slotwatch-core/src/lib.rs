mod config;

pub use config::{ConfigError, WatchConfig, MIN_POLL_INTERVAL};
