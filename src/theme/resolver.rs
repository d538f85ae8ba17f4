//! Theme Resolver & Applicator.
//!
//! Owns the effective theme. Startup resolution prefers the stored choice
//! over the system signal; explicit changes write through to the store,
//! reapply the root marker, and notify subscribers before returning.

use tracing::debug;

use crate::error::ThemeError;

use super::host::HostEnvironment;
use super::root::RenderRoot;
use super::storage::PreferenceStore;
use super::system::SystemPreferenceReader;
use super::{Theme, DARK_MARKER};

/// Lifecycle of a resolver.
///
/// Entering `Ready` guarantees the effective theme is defined; it never
/// becomes undefined again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Uninitialized,
    Ready(Theme),
}

/// Handle returned by [`ThemeResolver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Theme)>;

/// Consumer-facing view of the effective theme.
pub trait ThemeContext {
    /// Effective theme, `None` until initialized or explicitly set.
    fn current(&self) -> Option<Theme>;
    fn set_theme(&mut self, theme: Theme);
    /// Flip the effective theme and return the new value.
    fn toggle_theme(&mut self) -> Result<Theme, ThemeError>;
    fn subscribe(&mut self, callback: Box<dyn FnMut(Theme)>) -> SubscriptionId;
}

/// Single owner of the effective theme for one UI tree.
pub struct ThemeResolver {
    store: PreferenceStore,
    system: SystemPreferenceReader,
    root: Option<Box<dyn RenderRoot>>,
    state: ResolverState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeResolver {
    pub fn new(host: HostEnvironment) -> Self {
        Self {
            store: PreferenceStore::new(host.storage),
            system: SystemPreferenceReader::new(host.color_scheme),
            root: host.root,
            state: ResolverState::Uninitialized,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ResolverState::Ready(_))
    }

    /// Resolve the startup theme: stored choice first, then the system signal.
    ///
    /// Meant to run once per session. A repeated call re-derives with the
    /// same precedence and reapplies.
    pub fn initialize(&mut self) -> Theme {
        let theme = match self.store.read() {
            Some(stored) => {
                debug!(theme = %stored, "resolved theme from stored preference");
                stored
            }
            None => {
                let system = self.system.read();
                debug!(theme = %system, "resolved theme from system preference");
                system
            }
        };
        self.commit(theme);
        theme
    }

    /// Make `theme` effective, persist it, reapply, and notify.
    pub fn set_theme(&mut self, theme: Theme) {
        self.store.write(theme);
        self.commit(theme);
    }

    /// Switch to the opposite of the effective theme.
    ///
    /// Fails with [`ThemeError::NotInitialized`] before the resolver is
    /// ready; nothing is written, applied, or published in that case.
    pub fn toggle_theme(&mut self) -> Result<Theme, ThemeError> {
        let ResolverState::Ready(current) = self.state else {
            return Err(ThemeError::NotInitialized);
        };
        let next = current.opposite();
        self.set_theme(next);
        Ok(next)
    }

    pub fn current(&self) -> Option<Theme> {
        match self.state {
            ResolverState::Ready(theme) => Some(theme),
            ResolverState::Uninitialized => None,
        }
    }

    /// Register a callback invoked with every newly committed theme.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Theme) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription; returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Read-only access to the preference store backing this resolver.
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    fn commit(&mut self, theme: Theme) {
        self.state = ResolverState::Ready(theme);
        self.apply(theme);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(theme);
        }
    }

    fn apply(&mut self, theme: Theme) {
        if let Some(root) = self.root.as_mut() {
            root.set_marker(DARK_MARKER, theme.is_dark());
            debug!(%theme, "applied theme to rendering root");
        }
    }
}

impl ThemeContext for ThemeResolver {
    fn current(&self) -> Option<Theme> {
        ThemeResolver::current(self)
    }

    fn set_theme(&mut self, theme: Theme) {
        ThemeResolver::set_theme(self, theme);
    }

    fn toggle_theme(&mut self) -> Result<Theme, ThemeError> {
        ThemeResolver::toggle_theme(self)
    }

    fn subscribe(&mut self, callback: Box<dyn FnMut(Theme)>) -> SubscriptionId {
        ThemeResolver::subscribe(self, callback)
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("state", &self.state)
            .field("store", &self.store)
            .field("system", &self.system)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{
        DocumentRoot, FixedColorScheme, KeyValueStorage, MemoryStorage, SharedRoot,
        THEME_STORAGE_KEY,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seeded_storage(value: &str) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(THEME_STORAGE_KEY, value)
            .expect("memory write");
        storage
    }

    fn resolver_with(stored: Option<&str>, system: Theme) -> (ThemeResolver, SharedRoot) {
        let root: SharedRoot = Rc::new(RefCell::new(DocumentRoot::new()));
        let storage = stored.map_or_else(MemoryStorage::new, seeded_storage);
        let host = HostEnvironment::headless()
            .with_storage(storage)
            .with_color_scheme(FixedColorScheme(system))
            .with_root(Rc::clone(&root));
        (ThemeResolver::new(host), root)
    }

    #[test]
    fn starts_uninitialized_without_a_theme() {
        let (resolver, _) = resolver_with(None, Theme::Dark);
        assert_eq!(resolver.state(), ResolverState::Uninitialized);
        assert_eq!(resolver.current(), None);
    }

    #[test]
    fn initialize_falls_back_to_system_preference() {
        let (mut resolver, root) = resolver_with(None, Theme::Dark);
        assert_eq!(resolver.initialize(), Theme::Dark);
        assert!(root.borrow().has_marker(DARK_MARKER));
        assert_eq!(resolver.state(), ResolverState::Ready(Theme::Dark));
    }

    #[test]
    fn stored_preference_beats_system_preference() {
        let (mut resolver, root) = resolver_with(Some("dark"), Theme::Light);
        assert_eq!(resolver.initialize(), Theme::Dark);
        assert!(root.borrow().has_marker(DARK_MARKER));
    }

    #[test]
    fn initialize_does_not_persist_the_system_fallback() {
        let (mut resolver, _) = resolver_with(None, Theme::Dark);
        resolver.initialize();
        assert_eq!(resolver.store().read(), None);
    }

    #[test]
    fn repeated_initialize_reapplies_same_precedence() {
        let (mut resolver, root) = resolver_with(Some("light"), Theme::Dark);
        assert_eq!(resolver.initialize(), Theme::Light);
        root.borrow_mut().set_marker(DARK_MARKER, true);
        assert_eq!(resolver.initialize(), Theme::Light);
        assert!(!root.borrow().has_marker(DARK_MARKER));
    }

    #[test]
    fn headless_initialize_defaults_to_light() {
        let mut resolver = ThemeResolver::new(HostEnvironment::headless());
        assert_eq!(resolver.initialize(), Theme::Light);
        assert!(resolver.is_ready());
    }

    #[test]
    fn toggle_round_trips_and_persists() {
        let (mut resolver, root) = resolver_with(None, Theme::Light);
        resolver.initialize();

        assert_eq!(resolver.toggle_theme(), Ok(Theme::Dark));
        assert_eq!(resolver.current(), Some(Theme::Dark));
        assert_eq!(resolver.store().read(), Some(Theme::Dark));
        assert!(root.borrow().has_marker(DARK_MARKER));

        assert_eq!(resolver.toggle_theme(), Ok(Theme::Light));
        assert_eq!(resolver.current(), Some(Theme::Light));
        assert_eq!(resolver.store().read(), Some(Theme::Light));
        assert!(!root.borrow().has_marker(DARK_MARKER));
    }

    #[test]
    fn toggle_before_initialize_fails_without_side_effects() {
        let (mut resolver, root) = resolver_with(None, Theme::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        resolver.subscribe(move |theme| sink.borrow_mut().push(theme));

        assert_eq!(resolver.toggle_theme(), Err(ThemeError::NotInitialized));
        assert_eq!(resolver.current(), None);
        assert_eq!(resolver.store().read(), None);
        assert!(!root.borrow().has_marker(DARK_MARKER));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn set_theme_is_valid_before_initialize() {
        let (mut resolver, _) = resolver_with(None, Theme::Light);
        resolver.set_theme(Theme::Dark);
        assert_eq!(resolver.state(), ResolverState::Ready(Theme::Dark));
        assert_eq!(resolver.toggle_theme(), Ok(Theme::Light));
    }

    #[test]
    fn set_theme_twice_is_idempotent() {
        let (mut resolver, root) = resolver_with(None, Theme::Light);
        resolver.initialize();
        resolver.set_theme(Theme::Dark);
        resolver.set_theme(Theme::Dark);
        assert_eq!(resolver.current(), Some(Theme::Dark));
        assert_eq!(resolver.store().read(), Some(Theme::Dark));
        assert_eq!(root.borrow().class_attribute(), "class=\"dark\"");
    }

    #[test]
    fn subscribers_see_every_change_before_return() {
        let (mut resolver, _) = resolver_with(None, Theme::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&seen);
        let second = Rc::clone(&seen);
        resolver.subscribe(move |theme| first.borrow_mut().push(("a", theme)));
        resolver.subscribe(move |theme| second.borrow_mut().push(("b", theme)));

        resolver.initialize();
        resolver.set_theme(Theme::Dark);
        assert_eq!(seen.borrow().last(), Some(&("b", Theme::Dark)));
        resolver.toggle_theme().expect("ready");

        assert_eq!(
            *seen.borrow(),
            vec![
                ("a", Theme::Light),
                ("b", Theme::Light),
                ("a", Theme::Dark),
                ("b", Theme::Dark),
                ("a", Theme::Light),
                ("b", Theme::Light),
            ]
        );
    }

    #[test]
    fn unsubscribed_callbacks_stop_receiving() {
        let (mut resolver, _) = resolver_with(None, Theme::Light);
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = resolver.subscribe(move |_| *counter.borrow_mut() += 1);

        resolver.set_theme(Theme::Dark);
        assert!(resolver.unsubscribe(id));
        assert!(!resolver.unsubscribe(id));
        resolver.set_theme(Theme::Light);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(resolver.subscriber_count(), 0);
    }

    #[test]
    fn context_trait_exposes_the_consumer_surface() {
        fn flip(ctx: &mut dyn ThemeContext) -> Result<Theme, ThemeError> {
            ctx.toggle_theme()
        }

        let (mut resolver, _) = resolver_with(Some("dark"), Theme::Light);
        resolver.initialize();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        ThemeContext::subscribe(
            &mut resolver,
            Box::new(move |theme| *sink.borrow_mut() = Some(theme)),
        );

        assert_eq!(flip(&mut resolver), Ok(Theme::Light));
        assert_eq!(*seen.borrow(), Some(Theme::Light));
        assert_eq!(ThemeContext::current(&resolver), Some(Theme::Light));
    }
}
