use dioxus::prelude::*;
use crate::components::{ Badge, BadgeVariant, SectionHeader };
use crate::content::SKILLS;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "mx-auto max-w-6xl px-4 py-16",
            SectionHeader { eyebrow: "Toolkit", title: "Skills", icon: "✦" }
            div { class: "flex flex-wrap gap-2",
                for skill in SKILLS {
                    Badge { key: "{skill}", variant: BadgeVariant::Outline, class: "px-3 py-1 text-sm", "{skill}" }
                }
            }
        }
    }
}
