//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`STOREFRONT_*`, and `TELEGRAM_*` for the relay
//!    credentials, which are never read from files).
//! 2. TOML file specified via `--config`.
//! 3. `./storefront.toml` in the current directory.
//! 4. `$XDG_CONFIG_HOME/storefront/storefront.toml`
//!    (or `~/.config/storefront/storefront.toml`).
//! 5. Built-in defaults.

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{
    config_root_dir, default_global_config_path, default_preferences_path,
    initialize_default_global_config, initialize_default_global_config_at_path,
};
pub use loader::{load_config, load_config_from_sources};
pub use types::{
    ClientConfig, Config, GlobalConfigInitResult, RelayConfig, RelayCredentials, ServerConfig,
    ThemeConfig,
};
