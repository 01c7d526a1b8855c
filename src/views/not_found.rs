use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container mx-auto p-4",
            h1 { class: "text-2xl font-bold mb-4", "Nothing at /{path}" }
            Link { class: "text-blue-600 hover:underline", to: Route::Home {}, "Back to the portfolio" }
        }
    }
}
