//! Preference Store: the durable home of the user's explicit theme choice.
//!
//! Backends implement [`KeyValueStorage`]. [`PreferenceStore`] wraps an
//! optional backend and never fails: an absent or broken backend reads as
//! "no choice recorded" and swallows writes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StorageError;

use super::{Theme, THEME_STORAGE_KEY};

/// Table holding stored preferences inside a [`FileStorage`] file.
const PREFERENCES_SECTION: &str = "preferences";

/// Client-side persistent string store, keyed by fixed identifiers.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-local storage backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a `[preferences]` table in a TOML file.
///
/// Writes only touch the assignment for the written key, so comments and
/// unrelated entries in the file survive.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let table: toml::Table = toml::from_str(&text)?;
        let Some(section) = table.get(PREFERENCES_SECTION) else {
            return Ok(None);
        };
        let Some(section) = section.as_table() else {
            return Err(StorageError::Invalid(format!(
                "`{PREFERENCES_SECTION}` in {} is not a table",
                self.path.display()
            )));
        };
        Ok(section
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let existing = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        let upserted = upsert_preference(&existing, key, value);
        let updated = if stored_value(&upserted, key).as_deref() == Some(value) {
            upserted
        } else {
            debug!(
                path = %self.path.display(),
                "line upsert did not read back; rewriting from parsed table"
            );
            rewrite_from_table(&existing, key, value)?
        };
        std::fs::write(&self.path, updated)?;
        Ok(())
    }
}

/// Value of `key` in the `[preferences]` table, if `text` parses.
fn stored_value(text: &str, key: &str) -> Option<String> {
    let table: toml::Table = toml::from_str(text).ok()?;
    table
        .get(PREFERENCES_SECTION)?
        .as_table()?
        .get(key)?
        .as_str()
        .map(str::to_string)
}

/// Insert `key` through a full parse. Drops comments and layout.
fn rewrite_from_table(input: &str, key: &str, value: &str) -> Result<String, StorageError> {
    let mut table: toml::Table = toml::from_str(input)?;
    if !table.contains_key(PREFERENCES_SECTION) {
        table.insert(
            PREFERENCES_SECTION.to_string(),
            toml::Value::Table(toml::Table::new()),
        );
    }
    let Some(section) = table
        .get_mut(PREFERENCES_SECTION)
        .and_then(toml::Value::as_table_mut)
    else {
        return Err(StorageError::Invalid(format!(
            "`{PREFERENCES_SECTION}` is not a table"
        )));
    };
    section.insert(key.to_string(), toml::Value::String(value.to_string()));
    toml::to_string(&table)
        .map_err(|e| StorageError::Invalid(format!("serialize preferences: {e}")))
}

/// Upsert `key = "value"` under `[preferences]`, preserving other lines.
fn upsert_preference(input: &str, key: &str, value: &str) -> String {
    let assignment = format!("{key} = {}", toml::Value::String(value.to_string()));
    let mut lines: Vec<String> = input.lines().map(str::to_string).collect();

    let section_start = lines
        .iter()
        .position(|line| table_header(line) == Some(PREFERENCES_SECTION));

    if let Some(start) = section_start {
        let end = lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| table_header(line).is_some())
            .map_or(lines.len(), |(idx, _)| idx);

        if let Some(idx) = (start + 1..end).find(|&idx| is_assignment_key(&lines[idx], key)) {
            lines[idx] = assignment;
        } else {
            lines.insert(start + 1, assignment);
        }
        return with_trailing_newline(lines.join("\n"));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("[{PREFERENCES_SECTION}]"));
    lines.push(assignment);
    with_trailing_newline(lines.join("\n"))
}

/// Table name of a `[name]` or `[[name]]` header line, ignoring a trailing comment.
fn table_header(line: &str) -> Option<&str> {
    let code = line.split('#').next().unwrap_or(line).trim();
    let inner = code.strip_prefix('[')?.strip_suffix(']')?;
    let inner = inner
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(inner);
    Some(inner.trim())
}

/// True when `line` assigns to `key`, bare or quoted.
fn is_assignment_key(line: &str, key: &str) -> bool {
    let line = line.trim_start();
    let double = format!("\"{key}\"");
    let single = format!("'{key}'");
    [key, double.as_str(), single.as_str()].iter().any(|candidate| {
        line.strip_prefix(candidate)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    })
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Reads and writes the single theme preference under [`THEME_STORAGE_KEY`].
pub struct PreferenceStore {
    storage: Option<Box<dyn KeyValueStorage>>,
}

impl PreferenceStore {
    /// `None` models an execution context without persistent storage.
    pub fn new(storage: Option<Box<dyn KeyValueStorage>>) -> Self {
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    /// Previously persisted theme, or `None` when never set or unreadable.
    pub fn read(&self) -> Option<Theme> {
        let storage = self.storage.as_ref()?;
        let raw = match storage.get_item(THEME_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "theme preference could not be read");
                return None;
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                debug!(error = %err, "ignoring unrecognized stored theme");
                None
            }
        }
    }

    /// Persist `theme`, overwriting any prior value. No-op without storage.
    pub fn write(&mut self, theme: Theme) {
        let Some(storage) = self.storage.as_mut() else {
            debug!(%theme, "no persistent storage; theme choice not saved");
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            warn!(error = %err, %theme, "theme preference could not be saved");
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("available", &self.is_available())
            .finish()
    }
}
