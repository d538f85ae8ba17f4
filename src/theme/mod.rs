//! Light/dark theme preference resolution.
//!
//! The resolver composes three capabilities supplied by the host:
//! - a persistent key-value store holding the user's explicit choice,
//! - the OS light/dark signal used when no choice has been stored,
//! - the rendering root that receives the `dark` marker.
//!
//! Any capability may be missing (headless prerendering, tests); missing
//! capabilities degrade to documented defaults instead of raising errors.

mod host;
mod resolver;
mod root;
mod storage;
mod system;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

pub use host::HostEnvironment;
pub use resolver::{ResolverState, SubscriptionId, ThemeContext, ThemeResolver};
pub use root::{DocumentRoot, RenderRoot, SharedRoot};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, PreferenceStore};
pub use system::{ColorSchemeProbe, FixedColorScheme, OsColorScheme, SystemPreferenceReader};

/// Fixed key under which the explicit theme choice is persisted.
pub const THEME_STORAGE_KEY: &str = "store-theme";

/// Marker placed on the rendering root while the dark theme is active.
pub const DARK_MARKER: &str = "dark";

/// One of the two rendering modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable lowercase name, also the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other variant.
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::UnknownTheme(value.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
    }

    #[test]
    fn rejects_system_as_a_theme() {
        let err = "system".parse::<Theme>().expect_err("must reject");
        assert_eq!(err, ThemeError::UnknownTheme("system".to_string()));
    }

    #[test]
    fn opposite_flips_both_ways() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Dark.opposite(), Theme::Light);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&Theme::Dark).expect("serialize"),
            "\"dark\""
        );
        let parsed: Theme = serde_json::from_str("\"light\"").expect("deserialize");
        assert_eq!(parsed, Theme::Light);
    }
}
