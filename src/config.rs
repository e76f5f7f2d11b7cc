//! Skill configuration.
//!
//! Values come from environment variables, falling back to the `env` map in
//! `$HOME/.mistlock-observatory/settings.json`, falling back to defaults.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::warn;
use url::Url;

use crate::gw2::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT};
use crate::utils::Settings;

/// Root of the Guild Wars 2 API.
pub const API_BASE_VAR: &str = "GW2_API_BASE";

/// Per-request timeout in whole seconds.
pub const REQUEST_TIMEOUT_VAR: &str = "MISTLOCK_REQUEST_TIMEOUT_SECS";

/// Whether achievement names are looked up concurrently.
pub const CONCURRENT_LOOKUPS_VAR: &str = "MISTLOCK_CONCURRENT_LOOKUPS";

/// Resolved skill configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    /// Guild Wars 2 API root.
    pub api_base: Url,
    /// Timeout applied to each API request.
    pub request_timeout: Duration,
    /// Look up featured achievement names concurrently.
    pub concurrent_lookups: bool,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            concurrent_lookups: true,
        }
    }
}

impl SkillConfig {
    /// Resolves configuration from the environment and the settings file.
    ///
    /// An unreadable settings file is logged and treated as empty.
    pub fn from_env() -> Result<Self> {
        let settings = settings_or_default(Settings::load());
        Self::from_settings(&settings)
    }

    /// Resolves configuration from the environment and `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::from_lookup(|key| settings.get_env_var(key))
    }

    /// Resolves configuration from `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_VAR) {
            config.api_base =
                Url::parse(base.trim()).with_context(|| format!("Invalid {API_BASE_VAR}: {base}"))?;
        }

        if let Some(secs) = lookup(REQUEST_TIMEOUT_VAR) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid {REQUEST_TIMEOUT_VAR}: {secs}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(flag) = lookup(CONCURRENT_LOOKUPS_VAR) {
            config.concurrent_lookups =
                parse_flag(&flag).with_context(|| format!("Invalid {CONCURRENT_LOOKUPS_VAR}"))?;
        }

        Ok(config)
    }
}

fn settings_or_default(settings: Result<Settings>) -> Settings {
    settings.unwrap_or_else(|err| {
        warn!("Ignoring settings file: {err:#}");
        Settings::default()
    })
}

fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL")
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true or false, got {other:?}"),
    }
}
