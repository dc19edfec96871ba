use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ClientError;

/// Which API prefix the client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    #[default]
    Production,
    /// Local development behind the dev proxy.
    Development,
}

impl ApiMode {
    pub fn base_path(self) -> &'static str {
        match self {
            ApiMode::Production => "/api",
            ApiMode::Development => "/dev-api",
        }
    }
}

impl FromStr for ApiMode {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(ApiMode::Production),
            "development" | "dev" => Ok(ApiMode::Development),
            other => Err(ClientError::Config(format!(
                "TC_API_MODE must be production or development, got '{other}'"
            ))),
        }
    }
}

/// AMap web-service endpoint and key.
#[derive(Debug, Clone)]
pub struct AmapConfig {
    pub base_url: String,
    /// Geocoding is unavailable without a key; coordinates can still be typed.
    pub key: Option<String>,
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and authority of the API server, without a path.
    pub api_origin: String,
    pub mode: ApiMode,
    pub request_timeout: Duration,
    /// JSON file holding the `token`, `user` and `theme` keys.
    pub session_file: PathBuf,
    pub amap: AmapConfig,
    /// How often the unread-inquiry count is refreshed.
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Defaults for talking to `api_origin`.
    pub fn for_origin(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: api_origin.into().trim_end_matches('/').to_string(),
            mode: ApiMode::Production,
            request_timeout: Duration::from_millis(5000),
            session_file: PathBuf::from(".tc-session.json"),
            amap: AmapConfig {
                base_url: "https://restapi.amap.com".into(),
                key: None,
            },
            poll_interval: Duration::from_secs(30),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `TC_API_ORIGIN`         | `http://localhost:8080`    |
    /// | `TC_API_MODE`           | `production`               |
    /// | `TC_REQUEST_TIMEOUT_MS` | `5000`                     |
    /// | `TC_SESSION_FILE`       | `.tc-session.json`         |
    /// | `AMAP_BASE_URL`         | `https://restapi.amap.com` |
    /// | `AMAP_KEY`              | unset                      |
    /// | `TC_POLL_INTERVAL_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ClientError> {
        let origin =
            std::env::var("TC_API_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".into());
        let mut config = Self::for_origin(origin);

        if let Ok(mode) = std::env::var("TC_API_MODE") {
            config.mode = mode.parse()?;
        }
        config.request_timeout = Duration::from_millis(env_or("TC_REQUEST_TIMEOUT_MS", 5000)?);
        if let Ok(path) = std::env::var("TC_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }
        if let Ok(base_url) = std::env::var("AMAP_BASE_URL") {
            config.amap.base_url = base_url.trim_end_matches('/').to_string();
        }
        config.amap.key = std::env::var("AMAP_KEY").ok().filter(|k| !k.trim().is_empty());
        config.poll_interval = Duration::from_secs(env_or("TC_POLL_INTERVAL_SECS", 30)?);

        config.validate()?;
        Ok(config)
    }

    /// Reject zero durations.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.request_timeout.is_zero() {
            return Err(ClientError::Config(
                "TC_REQUEST_TIMEOUT_MS must be greater than zero".into(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(ClientError::Config(
                "TC_POLL_INTERVAL_SECS must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Origin plus the mode's API prefix, e.g. `http://host:8080/api`.
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_origin, self.mode.base_path())
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ClientError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ClientError::Config(format!("{key} has an invalid value '{raw}'"))),
        Err(_) => Ok(default),
    }
}
