// Make common test utilities available
pub mod common;
mod navigation;
mod theme;
