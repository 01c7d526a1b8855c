mod preferences;

pub use preferences::PreferenceError;
