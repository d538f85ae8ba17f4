//! `theme` command helpers.
//!
//! Builds the host environment from config and CLI flags, runs one resolver
//! action, and reports the effective theme plus the root marker it produced.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use storefront::config::{default_preferences_path, Config};
use storefront::error::ThemeError;
use storefront::theme::{
    DocumentRoot, FileStorage, FixedColorScheme, HostEnvironment, OsColorScheme, SharedRoot,
    Theme, ThemeResolver,
};

use tracing::debug;

use crate::cli::{ThemeAction, ThemeArgs};

/// Outcome of one `theme` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThemeReport {
    pub theme: Theme,
    pub root_class: String,
    pub changes: Vec<Theme>,
}

/// Handle `theme show|set|toggle` and print the result.
pub(crate) fn handle_theme_command(config: &Config, args: &ThemeArgs) -> Result<(), ThemeError> {
    let storage_path = if args.headless {
        None
    } else {
        preferences_path(config)
    };
    let root: SharedRoot = Rc::new(RefCell::new(DocumentRoot::new()));
    let host = host_environment(storage_path.clone(), args, Rc::clone(&root));

    let report = run_theme_action(host, root, args.action)?;
    debug!(changes = ?report.changes, "theme notifications");
    println!("theme: {}", report.theme);
    println!("root: {}", report.root_class);
    match storage_path {
        Some(path) => println!("preferences: {}", path.display()),
        None => println!("preferences: (not persisted)"),
    }
    Ok(())
}

/// Configured preferences file, falling back to the per-user default.
fn preferences_path(config: &Config) -> Option<PathBuf> {
    config
        .theme
        .storage_path
        .clone()
        .or_else(default_preferences_path)
}

fn host_environment(
    storage_path: Option<PathBuf>,
    args: &ThemeArgs,
    root: SharedRoot,
) -> HostEnvironment {
    let mut host = HostEnvironment::headless().with_root(root);
    if let Some(path) = storage_path {
        host = host.with_storage(FileStorage::new(path));
    }
    match (args.headless, args.system_theme) {
        (_, Some(theme)) => host.with_color_scheme(FixedColorScheme(theme)),
        (false, None) => host.with_color_scheme(OsColorScheme),
        (true, None) => host,
    }
}

/// Initialize a resolver on `host`, apply `action`, and collect what changed.
pub(crate) fn run_theme_action(
    host: HostEnvironment,
    root: SharedRoot,
    action: ThemeAction,
) -> Result<ThemeReport, ThemeError> {
    let mut resolver = ThemeResolver::new(host);
    let initial = resolver.initialize();

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    resolver.subscribe(move |theme| sink.borrow_mut().push(theme));

    let theme = match action {
        ThemeAction::Show => initial,
        ThemeAction::Set { theme } => {
            resolver.set_theme(theme);
            theme
        }
        ThemeAction::Toggle => resolver.toggle_theme()?,
    };

    let root_class = root.borrow().class_attribute();
    let changes = changes.borrow().clone();
    Ok(ThemeReport {
        theme,
        root_class,
        changes,
    })
}
