//! [`Config`]-related definitions.

use std::time;

use common::pagination::DEFAULT_WINDOW_SIZE;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::ResponseOrder;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote search backend configuration.
    pub backend: Backend,

    /// Search configuration.
    pub search: Search,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Remote search backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Base URL of the remote search service.
    #[default("http://127.0.0.1:8080/api".to_owned())]
    pub url: String,

    /// Timeout of a whole request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// Timeout of establishing a connection.
    #[default(time::Duration::from_secs(3))]
    #[serde(with = "humantime_serde")]
    pub connect_timeout: time::Duration,
}

impl From<Backend> for service::infra::http::Config {
    fn from(value: Backend) -> Self {
        let Backend {
            url,
            timeout,
            connect_timeout,
        } = value;

        Self {
            url,
            timeout,
            connect_timeout,
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Search {
    /// Maximum number of page buttons shown in the pagination controls.
    #[default(DEFAULT_WINDOW_SIZE)]
    pub window_size: u32,

    /// Policy of applying responses settling out of their issue order.
    pub ordering: ResponseOrder,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time;

    use service::ResponseOrder;

    use super::{Config, LogLevel};

    #[test]
    fn falls_back_to_defaults() {
        let conf = Config::new("/nonexistent/room-search.toml").unwrap();

        assert_eq!(conf.backend.url, "http://127.0.0.1:8080/api");
        assert_eq!(conf.backend.timeout, time::Duration::from_secs(10));
        assert_eq!(conf.backend.connect_timeout, time::Duration::from_secs(3));
        assert_eq!(conf.search.window_size, 5);
        assert_eq!(conf.search.ordering, ResponseOrder::LatestIssued);
        assert!(matches!(conf.log.level, LogLevel::Info));
    }

    #[test]
    fn fills_missing_sections_with_defaults() {
        let conf: Config = config::Config::builder()
            .set_override("search.window_size", 7)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(conf.search.window_size, 7);
        assert_eq!(conf.search.ordering, ResponseOrder::LatestIssued);
        assert_eq!(conf.backend.url, "http://127.0.0.1:8080/api");
    }

    #[test]
    fn converts_into_http_config() {
        let conf = Config::default();

        let http: service::infra::http::Config = conf.backend.into();

        assert_eq!(http.url, "http://127.0.0.1:8080/api");
        assert_eq!(http.timeout, time::Duration::from_secs(10));
    }
}
