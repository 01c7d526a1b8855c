use dioxus::prelude::*;
use crate::utils::cx;

#[component]
pub fn Card(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: cx(&["rounded-2xl border border-gray-200 bg-white/80 shadow-sm", &class]),
            {children}
        }
    }
}

#[component]
pub fn CardHeader(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: cx(&["px-5 pt-5", &class]), {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: cx(&["text-lg font-semibold", &class]), {children} }
    }
}

#[component]
pub fn CardContent(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: cx(&["px-5 pb-5", &class]), {children} }
    }
}
