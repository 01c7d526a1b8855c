use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::error::PreferenceError;

/// Durable key/value storage for user preferences.
pub trait Preferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local storage. Clones share the same entries, so building a second
/// resolver over a clone behaves like reloading the page.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.entries.borrow_mut().insert(key.to_string(), value.to_string());
        prefs
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let prefs = MemoryPreferences::new();
        let reloaded = prefs.clone();
        prefs.set("k", "v").unwrap();
        assert_eq!(reloaded.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(reloaded.get("missing").unwrap(), None);
    }
}
