use wasm_bindgen::JsValue;
use web_sys::{ Storage, Window };
use crate::error::PreferenceError;
use crate::utils::{ ThemeMode, DARK_MODE_CLASS };
use super::{ ColorSchemeQuery, Preferences, ThemeScope, UriLauncher };

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Option<Window> {
    web_sys::window()
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreferences;

impl BrowserPreferences {
    fn storage(&self) -> Result<Storage, PreferenceError> {
        let window = window().ok_or_else(|| {
            PreferenceError::Unavailable("no window object".to_string())
        })?;
        window
            .local_storage()
            .map_err(|e| PreferenceError::Unavailable(describe(e)))?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl Preferences for BrowserPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PreferenceError::Read(describe(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write(describe(e)))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserColorScheme;

impl ColorSchemeQuery for BrowserColorScheme {
    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|list| list.matches())
            .unwrap_or(false)
    }
}

/// Toggles the dark-mode class on `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRootScope;

impl ThemeScope for DocumentRootScope {
    fn apply(&self, mode: ThemeMode) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element()) else {
            log::warn!("No document root, cannot apply theme {}", mode);
            return;
        };

        if let Err(e) = root.class_list().toggle_with_force(DARK_MODE_CLASS, mode.is_dark()) {
            log::warn!("Failed to apply theme {}: {}", mode, describe(e));
        }
    }
}

/// Navigates the current tab to the URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLauncher;

impl UriLauncher for BrowserLauncher {
    fn open(&self, uri: &str) {
        let Some(window) = window() else {
            log::warn!("No window, dropping navigation to {}", uri);
            return;
        };

        if let Err(e) = window.location().set_href(uri) {
            log::warn!("Failed to open {}: {}", uri, describe(e));
        }
    }
}
