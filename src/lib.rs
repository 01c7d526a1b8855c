mod views;
mod components;
mod utils;
mod routes;
mod context;
mod content;
pub mod configs;
pub mod error;
pub mod platform;
pub mod services;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::context::AppContext;
pub use crate::configs::SiteConfig;
pub use crate::error::PreferenceError;
