//! Application configuration
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserCreate;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub service: ServiceSettings,

    /// Users loaded into the in-memory backend at startup
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Per-request deadline; 0 disables it
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Accepted plan names; empty accepts any plan
    #[serde(default = "default_plans")]
    pub plans: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedUser {
    pub username: String,

    #[serde(default)]
    pub hash: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_plan")]
    pub plan: String,

    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub read: u64,

    #[serde(default)]
    pub unread: u64,
}

impl From<SeedUser> for UserCreate {
    fn from(seed: SeedUser) -> Self {
        UserCreate {
            username: seed.username,
            hash: seed.hash,
            enabled: seed.enabled,
            plan: seed.plan,
            last_login_at: seed.last_login_at,
            read: seed.read,
            unread: seed.unread,
        }
    }
}

impl AdminConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables, e.g. USER_ADMIN_SERVICE__REQUEST_TIMEOUT_MS.
        // USER_ADMIN_SERVICE__PLANS takes a comma-separated list.
        settings = settings.add_source(
            config::Environment::with_prefix("USER_ADMIN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("service.plans"),
        );

        let config: AdminConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "service.channel_capacity must be greater than 0".to_string(),
            ));
        }
        if let Some(seed) = self.users.iter().find(|u| u.username.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "seed user with plan {:?} has an empty username",
                seed.plan
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.service.request_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            request_timeout_ms: default_request_timeout_ms(),
            plans: default_plans(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_channel_capacity() -> usize {
    32
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_plans() -> Vec<String> {
    vec!["free".to_string(), "premium".to_string()]
}

fn default_enabled() -> bool {
    true
}

fn default_plan() -> String {
    "free".to_string()
}
