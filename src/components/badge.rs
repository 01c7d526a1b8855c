use dioxus::prelude::*;
use crate::utils::cx;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Secondary => "bg-gray-100 text-gray-800",
            Self::Outline => "border border-gray-300 text-gray-700",
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default, into)] class: String,
    children: Element
) -> Element {
    rsx! {
        span {
            class: cx(&["inline-flex items-center rounded-xl px-2.5 py-1 text-xs", variant.classes(), &class]),
            {children}
        }
    }
}
