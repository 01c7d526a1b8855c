use std::rc::Rc;
use crate::platform::{ ColorSchemeQuery, Preferences, ThemeScope };
use crate::utils::ThemeMode;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Decides which [`ThemeMode`] is active and remembers the user's choice.
///
/// Persistence is fire-and-forget: storage failures are logged and otherwise
/// ignored, and a failed read resolves to [`ThemeMode::Light`].
#[derive(Clone)]
pub struct ThemePreferenceResolver {
    preferences: Rc<dyn Preferences>,
    color_scheme: Rc<dyn ColorSchemeQuery>,
    scope: Rc<dyn ThemeScope>,
    storage_key: String,
}

impl ThemePreferenceResolver {
    pub fn new(
        preferences: impl Preferences + 'static,
        color_scheme: impl ColorSchemeQuery + 'static,
        scope: impl ThemeScope + 'static
    ) -> Self {
        Self {
            preferences: Rc::new(preferences),
            color_scheme: Rc::new(color_scheme),
            scope: Rc::new(scope),
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[cfg(test)]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Mode to render on a fresh load. Only reads; nothing is written or applied.
    pub fn resolve_initial(&self) -> ThemeMode {
        let stored = match self.preferences.get(&self.storage_key) {
            Ok(raw) => parse_stored(raw),
            Err(e) => {
                log::warn!("Theme storage unreadable, using {}: {}", ThemeMode::Light, e);
                return ThemeMode::Light;
            }
        };

        let mode = stored.unwrap_or_else(|| {
            if self.color_scheme.prefers_dark() { ThemeMode::Dark } else { ThemeMode::Light }
        });
        log::debug!("Resolved initial theme: {}", mode);
        mode
    }

    /// Switches to the opposite mode, persists it and applies it to the document.
    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        if let Err(e) = self.preferences.set(&self.storage_key, next.as_str()) {
            log::warn!("Could not persist theme {}: {}", next, e);
        }
        self.scope.apply(next);
        log::info!("Theme switched to {}", next);
        next
    }

    pub fn apply(&self, mode: ThemeMode) {
        self.scope.apply(mode);
    }
}

fn parse_stored(raw: Option<String>) -> Option<ThemeMode> {
    raw?.parse()
        .map_err(|e| log::warn!("Ignoring stored theme: {}", e))
        .ok()
}
