// src/ui.rs

//! Local, unshared UI toggle state.

use serde::{Deserialize, Serialize};

/// Color theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Next theme in the Light → Dark → System cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

/// Open/closed state of the shell's panels plus the search box text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub theme: Theme,
    pub profile_menu_open: bool,
    search_open: bool,
    search_query: String,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    /// Close the search box and clear its query.
    pub fn close_search(&mut self) {
        self.search_open = false;
        self.search_query.clear();
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    /// Set the query text, opening the search box if needed.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_open = true;
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
