/// "Does the environment prefer a dark color scheme?"
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// A fixed answer, for hosts without a color-scheme signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedColorScheme {
    pub prefers_dark: bool,
}

impl FixedColorScheme {
    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }

    pub fn light() -> Self {
        Self { prefers_dark: false }
    }
}

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
