//! System Preference Reader: the host's ambient light/dark signal.

use super::Theme;

/// Source of the host's "prefers dark" signal.
///
/// `None` means the signal cannot be queried in this execution context.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Probe backed by the operating system's appearance setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsColorScheme;

impl ColorSchemeProbe for OsColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(matches!(dark_light::detect(), dark_light::Mode::Dark))
    }
}

/// Probe with a fixed answer, for tests and explicit CLI overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub Theme);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.0.is_dark())
    }
}

/// Reads the system preference, defaulting to [`Theme::Light`].
pub struct SystemPreferenceReader {
    probe: Option<Box<dyn ColorSchemeProbe>>,
}

impl SystemPreferenceReader {
    pub fn new(probe: Option<Box<dyn ColorSchemeProbe>>) -> Self {
        Self { probe }
    }

    /// `Dark` when the host signals a dark preference, otherwise `Light`.
    pub fn read(&self) -> Theme {
        match self.probe.as_ref().and_then(|probe| probe.prefers_dark()) {
            Some(true) => Theme::Dark,
            Some(false) | None => Theme::Light,
        }
    }
}

impl std::fmt::Debug for SystemPreferenceReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemPreferenceReader")
            .field("queryable", &self.probe.is_some())
            .finish()
    }
}
