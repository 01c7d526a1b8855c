use std::cell::RefCell;
use std::rc::Rc;
use crate::error::PreferenceError;
use crate::platform::{ Preferences, ThemeScope, UriLauncher };
use crate::utils::ThemeMode;

/// Storage that refuses reads and/or writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingPreferences {
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl FailingPreferences {
    pub fn disabled() -> Self {
        Self { fail_reads: true, fail_writes: true }
    }
}

impl Preferences for FailingPreferences {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        if self.fail_reads {
            Err(PreferenceError::Unavailable("storage disabled".to_string()))
        } else {
            Ok(None)
        }
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        if self.fail_writes {
            Err(PreferenceError::Write("quota exceeded".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Remembers every mode applied to the document.
#[derive(Clone, Debug, Default)]
pub struct RecordingScope {
    pub applied: Rc<RefCell<Vec<ThemeMode>>>,
}

impl RecordingScope {
    pub fn history(&self) -> Vec<ThemeMode> {
        self.applied.borrow().clone()
    }
}

impl ThemeScope for RecordingScope {
    fn apply(&self, mode: ThemeMode) {
        self.applied.borrow_mut().push(mode);
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingLauncher {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl UriLauncher for RecordingLauncher {
    fn open(&self, uri: &str) {
        self.opened.borrow_mut().push(uri.to_string());
    }
}
