//! Light/dark theme persisted under a storage key.
//!
//! The browser backs [`ThemeStore`] with `localStorage`; tests and the CLI
//! use [`MemoryStore`].

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Storage key used when the config does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "folio-ui-theme";

/// Colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette
    #[default]
    Dark,
    /// Follow the OS preference
    System,
}

impl Theme {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Concrete palette once the OS preference is known.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Self::System if prefers_dark => Self::Dark,
            Self::System => Self::Light,
            other => other,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Key-value persistence for the theme.
pub trait ThemeStore {
    /// Read the raw value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;
    /// Persist `value` under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same map, which is what a page reload
/// looks like from the controller's point of view.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the stored theme once and writes every change through.
pub struct ThemeController<S: ThemeStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Restore the stored theme, or `default` when nothing valid is stored.
    pub fn new(store: S, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let current = match store.load(&key) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "ignoring stored theme");
                default
            }),
            None => default,
        };
        Self {
            store,
            key,
            current,
        }
    }

    /// Theme as chosen by the user.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Persist and apply a theme.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.save(&self.key, theme.as_str())?;
        debug!(theme = %theme, "theme saved");
        self.current = theme;
        Ok(())
    }

    /// Flip between light and dark. `System` flips from its resolved value.
    pub fn toggle(&mut self, prefers_dark: bool) -> Result<Theme> {
        let next = match self.current.resolve(prefers_dark) {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_stored() {
        let ctl = ThemeController::new(MemoryStore::default(), DEFAULT_STORAGE_KEY, Theme::Dark);
        assert_eq!(ctl.current(), Theme::Dark);
    }

    #[test]
    fn set_survives_reload() {
        let store = MemoryStore::default();
        let mut ctl = ThemeController::new(store.clone(), "k", Theme::Dark);
        ctl.set(Theme::Light).unwrap();
        drop(ctl);

        let reloaded = ThemeController::new(store.clone(), "k", Theme::Dark);
        assert_eq!(reloaded.current(), Theme::Light);
        assert_eq!(store.load("k").as_deref(), Some("light"));
    }

    #[test]
    fn garbage_in_storage_falls_back_to_default() {
        let store = MemoryStore::default();
        store.save("k", "sepia").unwrap();
        let ctl = ThemeController::new(store, "k", Theme::Light);
        assert_eq!(ctl.current(), Theme::Light);
    }

    #[test]
    fn toggle_flips_resolved_theme() {
        let mut ctl = ThemeController::new(MemoryStore::default(), "k", Theme::System);
        assert_eq!(ctl.toggle(true).unwrap(), Theme::Light);
        assert_eq!(ctl.toggle(true).unwrap(), Theme::Dark);

        let mut light_os = ThemeController::new(MemoryStore::default(), "k", Theme::System);
        assert_eq!(light_os.toggle(false).unwrap(), Theme::Dark);
    }

    #[test]
    fn keys_are_isolated() {
        let store = MemoryStore::default();
        ThemeController::new(store.clone(), "a", Theme::Dark)
            .set(Theme::Light)
            .unwrap();
        assert_eq!(
            ThemeController::new(store, "b", Theme::Dark).current(),
            Theme::Dark
        );
    }
}
