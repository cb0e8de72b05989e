//! Light/dark theme resolution and persistence.
//!
//! The preference lives in `localStorage` under `theme` as `"dark"` or
//! `"light"`. When nothing is stored, the system color-scheme preference
//! decides; without either, the page renders light.
//!
//! TRADE-OFFS
//! ==========
//! Storage and media-query access sit behind small traits so resolution can
//! be tested natively with fakes. The browser adapters only exist in the
//! `hydrate` build; SSR always renders light and lets hydration correct it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark-theme";

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme storage write failed: {0}")]
    Storage(String),
    #[error("theme marker update failed: {0}")]
    Marker(String),
}

/// Persistent key-value slot for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), ThemeError>;
}

/// Read-only view of the environment's color-scheme preference.
pub trait ColorSchemeQuery {
    /// `None` when the environment cannot answer.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Element carrying the dark-theme style marker.
pub trait ThemeTarget {
    fn set_dark_marker(&mut self, enabled: bool) -> Result<(), ThemeError>;
}

/// Resolve the startup theme.
///
/// A non-empty stored value wins: `"dark"` means dark and anything else means
/// light. An empty or missing value defers to the system preference, and a
/// missing preference resolves to light.
pub fn resolve(store: Option<&dyn ThemeStore>, query: Option<&dyn ColorSchemeQuery>) -> Theme {
    if let Some(saved) = store.and_then(|s| s.load()).filter(|v| !v.is_empty()) {
        return Theme::from_dark(saved == Theme::Dark.as_str());
    }
    let prefers_dark = query.and_then(|q| q.prefers_dark()).unwrap_or(false);
    Theme::from_dark(prefers_dark)
}

/// Apply `theme` to the style marker and persist it.
///
/// Both steps are attempted even if the first fails; the first failure is
/// returned. Applying the same theme twice leaves the same state behind.
///
/// # Errors
///
/// Returns the marker error, or the storage error when only the write failed.
pub fn apply(theme: Theme, target: &mut impl ThemeTarget, store: &impl ThemeStore) -> Result<(), ThemeError> {
    let marked = target.set_dark_marker(theme.is_dark());
    let saved = store.save(theme.as_str());
    marked.and(saved)
}

/// Read the startup theme from the live browser environment.
///
/// Always light outside the browser build.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let store = BrowserStorage::from_window(&window);
        let query = BrowserColorScheme::new(window);
        resolve(store.as_ref().map(|s| s as &dyn ThemeStore), Some(&query))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Keeps a style target and store in step with the current theme.
///
/// Only a change of theme reaches the target and the store, so unrelated UI
/// updates feeding the same value cause no writes. A failed push is retried
/// on the next one.
pub struct ThemeSync<T, S> {
    target: T,
    store: Option<S>,
    last: Option<Theme>,
}

impl<T: ThemeTarget, S: ThemeStore> ThemeSync<T, S> {
    /// `store` is `None` when persistence is unavailable; the marker is
    /// still maintained.
    pub fn new(target: T, store: Option<S>) -> Self {
        Self { target, store, last: None }
    }

    /// Apply `theme` unless it is the one last applied.
    ///
    /// Returns `true` when the target (and store) were written.
    ///
    /// # Errors
    ///
    /// Returns the first failure from [`apply`], or the marker error when
    /// there is no store.
    pub fn push(&mut self, theme: Theme) -> Result<bool, ThemeError> {
        if self.last == Some(theme) {
            return Ok(false);
        }
        match &self.store {
            Some(store) => apply(theme, &mut self.target, store)?,
            None => self.target.set_dark_marker(theme.is_dark())?,
        }
        self.last = Some(theme);
        Ok(true)
    }
}

#[cfg(feature = "hydrate")]
impl ThemeSync<DocumentRoot, BrowserStorage> {
    /// Sync for the live `<html>` element and `localStorage`.
    pub fn for_document() -> Option<Self> {
        let root = DocumentRoot::current()?;
        let store = web_sys::window().and_then(|w| BrowserStorage::from_window(&w));
        Some(Self::new(root, store))
    }
}

// =============================================================================
// BROWSER ADAPTERS
// =============================================================================

/// `localStorage`-backed theme store.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    /// `None` when storage is disabled or unavailable.
    pub fn from_window(window: &web_sys::Window) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self(storage)),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        self.0.get_item(STORAGE_KEY).unwrap_or(None)
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        self.0
            .set_item(STORAGE_KEY, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}

/// `matchMedia`-backed system preference query.
#[cfg(feature = "hydrate")]
pub struct BrowserColorScheme(web_sys::Window);

#[cfg(feature = "hydrate")]
impl BrowserColorScheme {
    pub fn new(window: web_sys::Window) -> Self {
        Self(window)
    }
}

#[cfg(feature = "hydrate")]
impl ColorSchemeQuery for BrowserColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match self.0.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(mq)) => Some(mq.matches()),
            _ => None,
        }
    }
}

/// The `<html>` element.
#[cfg(feature = "hydrate")]
pub struct DocumentRoot(web_sys::Element);

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl ThemeTarget for DocumentRoot {
    fn set_dark_marker(&mut self, enabled: bool) -> Result<(), ThemeError> {
        self.0
            .class_list()
            .toggle_with_force(DARK_CLASS, enabled)
            .map(|_| ())
            .map_err(|e| ThemeError::Marker(format!("{e:?}")))
    }
}
