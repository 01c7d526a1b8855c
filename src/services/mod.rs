pub mod contact;
pub mod theme;

pub use contact::{ ContactFormSubmission, ContactIntentBuilder, DEFAULT_CONTACT_ADDRESS };
pub use theme::{ ThemePreferenceResolver, DEFAULT_THEME_STORAGE_KEY };
