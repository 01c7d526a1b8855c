use dioxus::prelude::*;
use crate::utils::cx;

const BASE: &str =
    "inline-flex items-center gap-2 rounded-2xl font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-600",
            Self::Outline =>
                "border border-gray-300 hover:bg-gray-50 text-gray-900 dark:text-gray-100 dark:border-gray-700 dark:hover:bg-gray-800",
            Self::Ghost => "text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-sm",
            Self::Lg => "px-5 py-2.5",
            Self::Icon => "p-2",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cx(&[BASE, size.classes(), variant.classes(), extra])
}

/// Renders a link when `href` is set, otherwise a `<button>`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default, into)] class: String,
    #[props(default = "button".to_string(), into)] kind: String,
    #[props(default, into)] href: String,
    #[props(default, into)] aria_label: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element
) -> Element {
    let classes = button_classes(variant, size, &class);
    let label = (!aria_label.is_empty()).then_some(aria_label);

    if href.is_empty() {
        rsx! {
            button {
                r#type: kind,
                class: classes,
                "aria-label": label,
                onclick: move |evt| onclick.call(evt),
                {children}
            }
        }
    } else {
        rsx! {
            a {
                href,
                class: classes,
                "aria-label": label,
                onclick: move |evt| onclick.call(evt),
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes_order() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Icon, "md:hidden");
        assert!(classes.starts_with(BASE));
        assert!(classes.ends_with("p-2 border border-gray-300 hover:bg-gray-50 text-gray-900 dark:text-gray-100 dark:border-gray-700 dark:hover:bg-gray-800 md:hidden"));
    }

    #[test]
    fn test_defaults_match_primary_button() {
        assert_eq!(
            button_classes(ButtonVariant::default(), ButtonSize::default(), ""),
            format!("{} px-4 py-2 text-sm bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-600", BASE)
        );
    }
}
