//! Capability ports the core logic talks to instead of probing the host
//! environment directly. Browser bindings only exist on wasm32; native
//! builds and tests use the in-memory ones.

mod color_scheme;
mod launcher;
mod preferences;
mod scope;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use color_scheme::{ ColorSchemeQuery, FixedColorScheme };
pub use launcher::{ LoggingLauncher, UriLauncher };
pub use preferences::{ MemoryPreferences, Preferences };
pub use scope::{ NoopScope, ThemeScope };

#[cfg(target_arch = "wasm32")]
pub use browser::{ BrowserColorScheme, BrowserLauncher, BrowserPreferences, DocumentRootScope };
