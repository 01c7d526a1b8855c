use chrono::Datelike;
use dioxus::prelude::*;
use crate::content::PROFILE;

#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer { class: "border-t border-gray-200",
            div { class: "mx-auto flex max-w-6xl flex-col items-center justify-between gap-4 px-4 py-8 md:flex-row",
                p { class: "text-xs text-gray-500", "© {year} {PROFILE.name}. All rights reserved." }
                div { class: "flex items-center gap-3 text-gray-500",
                    a { class: "hover:text-gray-900", href: PROFILE.github, "aria-label": "GitHub", "GitHub" }
                    a { class: "hover:text-gray-900", href: PROFILE.linkedin, "aria-label": "LinkedIn", "LinkedIn" }
                }
            }
        }
    }
}
