use dioxus::prelude::*;
use crate::views::{ Home, Navbar, NotFound };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound {
        segments: Vec<String>,
    },
}
