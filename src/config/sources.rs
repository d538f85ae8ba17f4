//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{APP_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./storefront.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; silently falling back would hide typos.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }

    if let Some(dir) = config_root() {
        let global = dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn explicit_path_wins_and_must_exist() {
        let read = |path: &Path| {
            if path == Path::new("custom.toml") {
                Ok("[server]\n".to_string())
            } else {
                not_found(path)
            }
        };
        let root = || Some(PathBuf::from("/cfg"));
        let (_, source) =
            read_config_text_with_sources(Some("custom.toml"), &read, &root).expect("explicit");
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("custom.toml")));

        let err = read_config_text_with_sources(Some("absent.toml"), &read, &root)
            .expect_err("missing explicit file");
        assert!(err.to_string().starts_with("io:"));
    }

    #[test]
    fn falls_back_to_global_then_defaults() {
        let read = |path: &Path| {
            if path == Path::new("/cfg/storefront/storefront.toml") {
                Ok("[client]\n".to_string())
            } else {
                not_found(path)
            }
        };
        let (_, source) =
            read_config_text_with_sources(None, &read, &|| Some(PathBuf::from("/cfg")))
                .expect("global");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/cfg/storefront/storefront.toml"))
        );

        let (text, source) =
            read_config_text_with_sources(None, &not_found, &|| None).expect("defaults");
        assert!(text.is_empty());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }
}
