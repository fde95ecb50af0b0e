//! Startup configuration resolved from environment variables.

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::profile::FaultProfile;

pub const ENV_VERSION: &str = "APP_VERSION";
pub const ENV_CHANNEL: &str = "DEPLOYMENT_CHANNEL";
pub const ENV_PORT: &str = "PORT";

pub const DEFAULT_VERSION: &str = "v1.0.0";
pub const DEFAULT_CHANNEL: &str = "stable";
pub const DEFAULT_PORT: u16 = 8080;

/// Channel label that switches the status page to its canary styling.
pub const CANARY_CHANNEL: &str = "canary";

/// Everything a running server needs, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub channel: String,
    pub profile: FaultProfile,
    pub port: u16,
}

impl AppConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// An empty value is treated the same as an unset variable.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let version = non_empty(ENV_VERSION).unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let channel = non_empty(ENV_CHANNEL).unwrap_or_else(|| DEFAULT_CHANNEL.to_string());
        let port = match non_empty(ENV_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let profile = FaultProfile::for_version(&version);

        debug!(%version, %channel, port, ?profile, "configuration resolved");

        Ok(Self {
            version,
            channel,
            profile,
            port,
        })
    }

    /// Config for `version` with every other setting at its default.
    pub fn for_version(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            profile: FaultProfile::for_version(&version),
            version,
            channel: DEFAULT_CHANNEL.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn is_canary(&self) -> bool {
        self.channel == CANARY_CHANNEL
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_version(DEFAULT_VERSION)
    }
}

fn parse_port(raw: &str) -> ConfigResult<u16> {
    raw.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
