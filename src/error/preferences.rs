use std::fmt::{ Display, Formatter };

/// Failure reported by a [`Preferences`](crate::platform::Preferences) port.
///
/// Nothing above the port surfaces these to the user; the theme resolver logs
/// them and falls back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    Unavailable(String),
    Read(String),
    Write(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            PreferenceError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            PreferenceError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failure() {
        let err = PreferenceError::Write("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage Write Error: quota exceeded");
    }
}
