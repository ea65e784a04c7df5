//! Light/dark display preference.
//!
//! # Responsibility
//! - Track the active theme and resolve it from stored and system
//!   preferences.
//!
//! # Invariants
//! - Resolution order: stored choice, then system preference, then light.
//! - An explicit choice always wins over later system changes.
//! - Storage backend is host-owned behind [`ThemeStore`].

use serde::{Deserialize, Serialize};

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stable string form used by stores and host attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses the stable string form; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Host-owned persistence for the user's explicit theme choice.
pub trait ThemeStore {
    /// Returns the stored choice, if the user ever made one.
    fn stored_theme(&self) -> Option<Theme>;
    /// Persists an explicit choice.
    fn save_theme(&mut self, theme: Theme);
}

/// Theme state machine over a host-owned store.
pub struct ThemeToggle<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeToggle<S> {
    /// Resolves the initial theme: stored choice, else system preference,
    /// else light.
    pub fn new(store: S, system_preference: Option<Theme>) -> Self {
        let current = store
            .stored_theme()
            .or(system_preference)
            .unwrap_or(Theme::Light);
        Self { store, current }
    }

    /// The theme the host should currently apply.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Applies and persists an explicit choice.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.save_theme(theme);
    }

    /// Flips the theme, persisting the new choice. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.flipped();
        self.set(next);
        next
    }

    /// Follows a system preference change only while no explicit choice is
    /// stored.
    pub fn system_preference_changed(&mut self, theme: Theme) {
        if self.store.stored_theme().is_none() {
            self.current = theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeStore, ThemeToggle};

    #[derive(Default)]
    struct MemoryStore {
        stored: Option<Theme>,
    }

    impl ThemeStore for MemoryStore {
        fn stored_theme(&self) -> Option<Theme> {
            self.stored
        }

        fn save_theme(&mut self, theme: Theme) {
            self.stored = Some(theme);
        }
    }

    #[test]
    fn stored_choice_beats_system_preference() {
        let toggle = ThemeToggle::new(
            MemoryStore {
                stored: Some(Theme::Dark),
            },
            Some(Theme::Light),
        );
        assert_eq!(toggle.current(), Theme::Dark);
    }

    #[test]
    fn system_preference_is_used_without_a_stored_choice() {
        let toggle = ThemeToggle::new(MemoryStore::default(), Some(Theme::Dark));
        assert_eq!(toggle.current(), Theme::Dark);
        let fallback = ThemeToggle::new(MemoryStore::default(), None);
        assert_eq!(fallback.current(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut toggle = ThemeToggle::new(MemoryStore::default(), None);
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.store.stored_theme(), Some(Theme::Dark));
        assert_eq!(toggle.toggle(), Theme::Light);
    }

    #[test]
    fn system_change_is_ignored_after_an_explicit_choice() {
        let mut toggle = ThemeToggle::new(MemoryStore::default(), None);
        toggle.set(Theme::Light);
        toggle.system_preference_changed(Theme::Dark);
        assert_eq!(toggle.current(), Theme::Light);

        let mut untouched = ThemeToggle::new(MemoryStore::default(), None);
        untouched.system_preference_changed(Theme::Dark);
        assert_eq!(untouched.current(), Theme::Dark);
    }

    #[test]
    fn string_form_round_trips() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" LIGHT "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
