mod class_names;
mod navigation;
mod theme_state;

pub use class_names::cx;
pub use navigation::NavigationDrawerState;
pub use theme_state::{ ThemeMode, DARK_MODE_CLASS };
