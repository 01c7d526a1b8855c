use dioxus::prelude::*;
use portfolio::{ AppContext, Route };

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger already set: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let ctx = use_context_provider(AppContext::from_environment);
    let theme = ctx.theme;

    rsx! {
        div {
            class: if theme().is_dark() { "dark min-h-screen" } else { "min-h-screen" },
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Router::<Route> {}
        }
    }
}
