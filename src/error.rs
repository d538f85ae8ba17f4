//! Unified error types for the storefront crate.

use std::fmt;

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors surfaced by the theme resolver's public contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Text that names neither `light` nor `dark`.
    UnknownTheme(String),
    /// `toggle_theme` was called before the resolver reached `Ready`.
    NotInitialized,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme(value) => {
                write!(f, "unknown theme `{value}`: expected `light` or `dark`")
            }
            Self::NotInitialized => write!(f, "theme resolver has not been initialized"),
        }
    }
}

impl std::error::Error for ThemeError {}

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors from a persistent key-value storage backend.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid storage: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// RelayError
// ---------------------------------------------------------------------------

/// Errors from the support-ticket relay, on both the server and client side.
#[derive(Debug)]
pub enum RelayError {
    /// Request used a verb other than POST.
    MethodNotAllowed(String),
    /// Body was not a ticket or a required field was missing or empty.
    MissingFields,
    /// Messaging credentials are not configured on the server.
    NotConfigured,
    /// The messaging API rejected the relayed message.
    Upstream {
        status: u16,
        body: serde_json::Value,
    },
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// A response body could not be decoded.
    InvalidResponse(String),
    /// The relay endpoint refused a submission (client side).
    Rejected { status: u16, message: String },
}

impl RelayError {
    /// HTTP status this error maps to when surfaced by the relay endpoint.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed(_) => 405,
            Self::MissingFields => 400,
            Self::Upstream { .. } => 502,
            Self::NotConfigured | Self::Http(_) | Self::InvalidResponse(_) => 500,
            Self::Rejected { status, .. } => *status,
        }
    }

    /// Caller-facing `message` field for the JSON error body.
    pub fn public_message(&self) -> String {
        match self {
            Self::MethodNotAllowed(method) => format!("Method {method} Not Allowed"),
            Self::MissingFields => "Missing required fields".to_string(),
            Self::NotConfigured => "Server configuration error".to_string(),
            Self::Upstream { .. } => "Failed to send notification to Telegram".to_string(),
            Self::Http(_) | Self::InvalidResponse(_) => "Internal Server Error".to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed(method) => write!(f, "method {method} not allowed"),
            Self::MissingFields => write!(f, "missing required fields"),
            Self::NotConfigured => write!(f, "messaging credentials are not configured"),
            Self::Upstream { status, body } => write!(f, "upstream status {status}: {body}"),
            Self::Http(e) => write!(f, "http: {e}"),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
            Self::Rejected { status, message } => write!(f, "relay status {status}: {message}"),
        }
    }
}

impl std::error::Error for RelayError {}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
