use dioxus::prelude::*;
use crate::components::{
    Badge,
    BadgeVariant,
    Button,
    ButtonSize,
    ButtonVariant,
    Card,
    CardContent,
    CardHeader,
    CardTitle,
    SectionHeader,
};
use crate::content::{ Project, PROJECTS };

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "mx-auto max-w-6xl px-4 py-16",
            SectionHeader { eyebrow: "Work", title: "Selected projects", icon: "↗" }
            div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for project in PROJECTS {
                    ProjectCard { key: "{project.title}", project: *project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        Card { class: "overflow-hidden",
            CardHeader {
                CardTitle { class: "flex items-start justify-between gap-4",
                    span { "{project.title}" }
                    Badge { "Featured" }
                }
            }
            CardContent {
                p { class: "mb-4 text-sm text-gray-600", "{project.blurb}" }
                div { class: "mb-4 flex flex-wrap gap-2",
                    for tag in project.tags {
                        Badge { key: "{tag}", variant: BadgeVariant::Outline, "{tag}" }
                    }
                }
                div { class: "flex items-center gap-3",
                    Button { size: ButtonSize::Sm, href: project.href, "Live ↗" }
                    Button {
                        size: ButtonSize::Sm,
                        variant: ButtonVariant::Outline,
                        href: project.repo,
                        "Code 🔗"
                    }
                }
            }
        }
    }
}
