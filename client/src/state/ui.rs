//! Local page chrome state (theme, navigation menu).
//!
//! DESIGN
//! ======
//! Held in a single `RwSignal<UiState>` context. The menu flag is transient
//! and never persisted; the theme is persisted by the `App` effect.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

const MENU_OPEN_GLYPH: &str = "\u{2715}";
const MENU_CLOSED_GLYPH: &str = "\u{2630}";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu regardless of its current state.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub fn menu_glyph(&self) -> &'static str {
        if self.menu_open { MENU_OPEN_GLYPH } else { MENU_CLOSED_GLYPH }
    }

    #[must_use]
    pub fn nav_links_class(&self) -> &'static str {
        if self.menu_open { "nav-links open" } else { "nav-links" }
    }
}
