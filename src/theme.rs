use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use std::rc::Rc;

use crate::storage::PreferenceStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Classes for the page container.
    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark min-h-screen bg-slate-950 text-slate-100",
            Theme::Light => "light min-h-screen bg-slate-100 text-slate-900",
        }
    }

    /// Stored preference, or the default when missing or unrecognized.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        store
            .load(THEME_KEY)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default()
    }

    /// Flips `self` and persists the result. A failed write is logged; the
    /// new theme still applies for this session.
    pub fn toggle_in(self, store: &dyn PreferenceStore) -> Self {
        let next = self.toggled();
        if let Err(e) = store.save(THEME_KEY, next.as_str()) {
            warn!("[theme] could not persist {}: {e}", next.as_str());
        }
        next
    }
}

/// App-wide theme, provided once at the root. The header toggle is its only
/// writer.
#[derive(Clone)]
pub struct ThemeContext {
    current: Signal<Theme>,
    store: Rc<dyn PreferenceStore>,
}

impl ThemeContext {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        let initial = Theme::load(store.as_ref());
        info!("[theme] starting with {}", initial.as_str());
        Self {
            current: Signal::new(initial),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        *self.current.read()
    }

    pub fn toggle(&self) {
        let mut current = self.current;
        let next = current.peek().toggle_in(self.store.as_ref());
        current.set(next);
    }
}

/// Installs the theme context; call once from the root component.
pub fn use_theme_provider(store: impl FnOnce() -> Rc<dyn PreferenceStore>) -> ThemeContext {
    use_context_provider(|| ThemeContext::new(store()))
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_preference_falls_back_to_dark() {
        let store = MemoryStore::default();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn unknown_preference_falls_back_to_dark() {
        let store = MemoryStore::default();
        store.save(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn toggle_persists_and_survives_reload() {
        let store = MemoryStore::default();
        let theme = Theme::load(&store);
        assert_eq!(theme, Theme::Dark);

        let theme = theme.toggle_in(&store);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));

        // fresh read, as after a page reload
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggle_twice_returns_to_start() {
        let store = MemoryStore::default();
        let t = Theme::Dark.toggle_in(&store).toggle_in(&store);
        assert_eq!(t, Theme::Dark);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));
    }
}
