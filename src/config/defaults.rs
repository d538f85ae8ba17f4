//! Default configuration constants.

/// Embedded default `storefront.toml` written by `storefront init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/storefront.toml");
/// Address the relay server binds by default.
pub(super) const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// Telegram bot API root.
pub(super) const DEFAULT_MESSAGING_API_BASE_URL: &str = "https://api.telegram.org";
/// Timeout for relayed messaging API calls.
pub(super) const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 15;
/// Relay endpoint the contact form posts to.
pub(super) const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000/api/submit-ticket";
/// Timeout for contact-form submissions.
pub(super) const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;
/// Directory name under the config root.
pub(super) const APP_DIR_NAME: &str = "storefront";
/// Config file name, both local and global.
pub(super) const CONFIG_FILE_NAME: &str = "storefront.toml";
/// File holding persisted UI preferences.
pub(super) const PREFERENCES_FILE_NAME: &str = "preferences.toml";
