//! Execution-context capabilities available to the theme resolver.

use super::root::RenderRoot;
use super::storage::KeyValueStorage;
use super::system::ColorSchemeProbe;

/// What the current execution context can offer the resolver.
///
/// A headless context (server-side prerendering, batch jobs) has none of the
/// capabilities; interactive hosts add the ones they support.
#[derive(Default)]
pub struct HostEnvironment {
    pub(super) storage: Option<Box<dyn KeyValueStorage>>,
    pub(super) color_scheme: Option<Box<dyn ColorSchemeProbe>>,
    pub(super) root: Option<Box<dyn RenderRoot>>,
}

impl HostEnvironment {
    /// Context with no storage, no system signal and no rendering root.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: impl KeyValueStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn with_color_scheme(mut self, probe: impl ColorSchemeProbe + 'static) -> Self {
        self.color_scheme = Some(Box::new(probe));
        self
    }

    pub fn with_root(mut self, root: impl RenderRoot + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    pub fn has_color_scheme(&self) -> bool {
        self.color_scheme.is_some()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }
}

impl std::fmt::Debug for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEnvironment")
            .field("storage", &self.has_storage())
            .field("color_scheme", &self.has_color_scheme())
            .field("root", &self.has_root())
            .finish()
    }
}
