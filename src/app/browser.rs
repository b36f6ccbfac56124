use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::theme::{Theme, ThemeStore, THEME_KEY};

/// Theme preference kept in the browser's local storage.
///
/// Values are written raw (`"dark"`/`"light"`), so the key stays readable by
/// anything else inspecting storage.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let (value, set_value, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
        Self { value, set_value }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for BrowserStore {
    fn load(&self) -> Option<String> {
        let value = self.value.get_untracked();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn save(&mut self, value: &str) {
        self.set_value.set(value.to_string());
    }
}

/// Puts the `dark` class on the root element to match the theme.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("couldn't apply {} theme: {:?}", theme, e);
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
