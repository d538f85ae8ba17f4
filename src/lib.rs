//! Storefront: theme preference resolution and support-ticket relay.
//!
//! The [`theme`] module owns the light/dark preference: a persistent
//! Preference Store, the OS color-scheme signal as fallback, and a resolver
//! that applies and publishes the effective theme. The [`support`] and
//! [`server`] modules implement the support page's contact form and the
//! endpoint relaying it to a messaging bot.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront::theme::{
//!     FileStorage, HostEnvironment, OsColorScheme, DocumentRoot, Theme, ThemeResolver,
//! };
//!
//! let host = HostEnvironment::headless()
//!     .with_storage(FileStorage::new("preferences.toml"))
//!     .with_color_scheme(OsColorScheme)
//!     .with_root(DocumentRoot::new());
//! let mut resolver = ThemeResolver::new(host);
//! let startup = resolver.initialize();
//! resolver.subscribe(|theme| println!("theme is now {theme}"));
//! resolver.set_theme(Theme::Dark);
//! # let _ = startup;
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod server;
pub mod support;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
