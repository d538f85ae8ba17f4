//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML layout; `Config` is the resolved runtime view
//! after environment overrides are applied.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_BIND_ADDR, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_MESSAGING_API_BASE_URL,
    DEFAULT_RELAY_TIMEOUT_SECS, DEFAULT_RELAY_URL,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub relay: RelayConfig,
    pub client: ClientConfig,
    pub theme: ThemeConfig,
}

/// Relay server settings from `[server]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Messaging bot credentials. Both halves are required to relay anything.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub bot_token: String,
    pub admin_chat_id: String,
}

impl std::fmt::Debug for RelayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayCredentials")
            .field("bot_token", &"<redacted>")
            .field("admin_chat_id", &self.admin_chat_id)
            .finish()
    }
}

/// Upstream messaging settings.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// Resolved from the environment; `None` makes the relay answer 500.
    pub credentials: Option<RelayCredentials>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_MESSAGING_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_RELAY_TIMEOUT_SECS,
            credentials: None,
        }
    }
}

/// Contact-form submission settings from `[client]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub relay_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

/// Theme preference settings from `[theme]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Override for the preferences file location.
    pub storage_path: Option<PathBuf>,
}

/// `[relay]` as written in TOML; credentials are not accepted from files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(super) struct FileRelayConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for FileRelayConfig {
    fn default() -> Self {
        let defaults = RelayConfig::default();
        Self {
            api_base_url: defaults.api_base_url,
            timeout_secs: defaults.timeout_secs,
        }
    }
}

/// Raw TOML layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub server: ServerConfig,
    pub relay: FileRelayConfig,
    pub client: ClientConfig,
    pub theme: ThemeConfig,
}

impl From<FileConfig> for Config {
    fn from(file: FileConfig) -> Self {
        Self {
            server: file.server,
            relay: RelayConfig {
                api_base_url: file.relay.api_base_url,
                timeout_secs: file.relay.timeout_secs.max(1),
                credentials: None,
            },
            client: ClientConfig {
                timeout_secs: file.client.timeout_secs.max(1),
                ..file.client
            },
            theme: file.theme,
        }
    }
}

/// Outcome of `storefront init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
