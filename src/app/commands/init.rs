//! `init` command helpers.

use std::path::Path;

use storefront::config::{
    initialize_default_global_config, initialize_default_global_config_at_path,
    GlobalConfigInitResult,
};
use storefront::error::ConfigError;

/// Write the default config, to `--config` when given, else the per-user path.
pub(crate) fn handle_init_command(
    config_override: Option<&str>,
    force: bool,
) -> Result<(), ConfigError> {
    let result = match config_override {
        Some(path) => initialize_default_global_config_at_path(Path::new(path), force)?,
        None => initialize_default_global_config(force)?,
    };
    println!("{}", describe_init_result(&result));
    Ok(())
}

fn describe_init_result(result: &GlobalConfigInitResult) -> String {
    match result {
        GlobalConfigInitResult::Created { path } => {
            format!("Wrote default config to {}", path.display())
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ),
        GlobalConfigInitResult::Overwritten { path, backup_path } => format!(
            "Overwrote {} (previous version saved to {})",
            path.display(),
            backup_path.display()
        ),
    }
}
