use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::theme::{Theme, ThemeStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Projects,
    MiniGame,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such view: {0:?}")]
pub struct ParseViewError(pub String);

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Projects, View::MiniGame];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Projects => "projects",
            View::MiniGame => "minigame",
        }
    }

    /// Text shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "HOME",
            View::Projects => "PROJECTS",
            View::MiniGame => "MINI GAME",
        }
    }
}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the active page and the theme flag.
///
/// The only ways to change either are [`ViewController::navigate`] and
/// [`ViewController::toggle_theme`]; every toggle is written through to the
/// store. The store is read at construction and at most once more through
/// [`ViewController::restore_theme`].
#[derive(Debug, Clone)]
pub struct ViewController<S> {
    active: View,
    theme: Theme,
    store: S,
    restored: bool,
}

impl<S: ThemeStore> ViewController<S> {
    pub fn new(store: S) -> Self {
        let theme = Theme::from_persisted(store.load().as_deref());
        Self {
            active: View::default(),
            theme,
            store,
            restored: false,
        }
    }

    pub fn active_view(&self) -> View {
        self.active
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-reads the persisted preference, for stores that only become
    /// readable after construction. Only the first call before any toggle
    /// reads; later writes to the store never change the theme.
    pub fn restore_theme(&mut self) -> Theme {
        if !self.restored {
            self.restored = true;
            self.theme = Theme::from_persisted(self.store.load().as_deref());
        }
        self.theme
    }

    /// Returns whether the active view changed.
    pub fn navigate(&mut self, view: View) -> bool {
        let changed = self.active != view;
        self.active = view;
        changed
    }

    /// String entry point for view names that arrive from outside the type
    /// system, such as a link target or a URL fragment. Unknown names are
    /// ignored.
    pub fn navigate_named(&mut self, name: &str) -> bool {
        match name.parse::<View>() {
            Ok(view) => self.navigate(view),
            Err(e) => {
                log::debug!("ignoring navigation: {}", e);
                false
            }
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.restored = true;
        self.theme = self.theme.toggled();
        self.store.save(self.theme.as_str());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryStore;

    #[test]
    fn test_parse_view() {
        assert_eq!("home".parse::<View>(), Ok(View::Home));
        assert_eq!("projects".parse::<View>(), Ok(View::Projects));
        assert_eq!("minigame".parse::<View>(), Ok(View::MiniGame));
        assert!("blog".parse::<View>().is_err());
        for view in View::ALL {
            assert_eq!(view.to_string().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn test_navigate() {
        let mut controller = ViewController::new(MemoryStore::default());
        assert_eq!(controller.active_view(), View::Home);

        assert!(controller.navigate(View::MiniGame));
        assert_eq!(controller.active_view(), View::MiniGame);
        assert!(!controller.navigate(View::MiniGame));

        assert!(controller.navigate_named("projects"));
        assert_eq!(controller.active_view(), View::Projects);
    }

    #[test]
    fn test_unknown_view_is_noop() {
        let mut controller = ViewController::new(MemoryStore::default());
        controller.navigate(View::Projects);
        assert!(!controller.navigate_named("admin"));
        assert!(!controller.navigate_named(""));
        assert_eq!(controller.active_view(), View::Projects);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut controller = ViewController::new(MemoryStore::default());
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.store().value(), None);

        assert_eq!(controller.toggle_theme(), Theme::Light);
        assert_eq!(controller.store().value(), Some("light"));

        assert_eq!(controller.toggle_theme(), Theme::Dark);
        assert_eq!(controller.store().value(), Some("dark"));
    }

    #[test]
    fn test_theme_restored_from_store() {
        let controller = ViewController::new(MemoryStore::with_value("light"));
        assert_eq!(controller.theme(), Theme::Light);

        let controller = ViewController::new(MemoryStore::with_value("neon"));
        assert_eq!(controller.theme(), Theme::Dark);

        // a restart sees what the previous session wrote
        let mut first = ViewController::new(MemoryStore::default());
        first.toggle_theme();
        let second = ViewController::new(first.store().clone());
        assert_eq!(second.theme(), Theme::Light);
    }

    #[test]
    fn test_restore_theme_rereads_store() {
        let mut controller = ViewController::new(MemoryStore::default());
        controller.store.save("light");
        assert_eq!(controller.restore_theme(), Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_ignores_store_writes_after_restore() {
        let mut controller = ViewController::new(MemoryStore::with_value("light"));
        assert_eq!(controller.restore_theme(), Theme::Light);

        // another tab writes a different preference
        controller.store.save("dark");
        assert_eq!(controller.restore_theme(), Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_ignores_store_writes_after_toggle() {
        let mut controller = ViewController::new(MemoryStore::default());
        assert_eq!(controller.toggle_theme(), Theme::Light);

        controller.store.save("dark");
        assert_eq!(controller.restore_theme(), Theme::Light);
        assert_eq!(controller.store().value(), Some("dark"));
    }
}
