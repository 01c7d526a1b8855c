use dioxus::prelude::*;

#[component]
pub fn SectionHeader(
    #[props(into)] eyebrow: String,
    #[props(into)] title: String,
    #[props(into)] icon: String
) -> Element {
    rsx! {
        div { class: "mb-8 flex items-center gap-3",
            div { class: "inline-flex h-10 w-10 items-center justify-center rounded-2xl bg-blue-600/10 text-blue-600",
                "{icon}"
            }
            div {
                p { class: "text-xs uppercase tracking-wider text-gray-500", "{eyebrow}" }
                h2 { class: "text-2xl font-semibold leading-tight md:text-3xl", "{title}" }
            }
        }
    }
}
