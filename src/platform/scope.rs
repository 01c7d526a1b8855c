use crate::utils::ThemeMode;

/// Hook into the presentation layer: make `mode` visible on the document.
pub trait ThemeScope {
    fn apply(&self, mode: ThemeMode);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopScope;

impl ThemeScope for NoopScope {
    fn apply(&self, mode: ThemeMode) {
        log::debug!("No document to style, ignoring theme {}", mode);
    }
}
