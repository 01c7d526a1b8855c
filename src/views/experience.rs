use dioxus::prelude::*;
use crate::components::{ Badge, Card, CardContent, CardHeader, CardTitle, SectionHeader };
use crate::content::EXPERIENCES;

#[component]
pub fn ExperienceList() -> Element {
    rsx! {
        section { id: "experience", class: "mx-auto max-w-6xl px-4 py-16",
            SectionHeader { eyebrow: "Path", title: "Experience", icon: "🚀" }
            div { class: "grid gap-6 md:grid-cols-2",
                for entry in EXPERIENCES {
                    Card { key: "{entry.company}",
                        CardHeader {
                            CardTitle { class: "flex items-center justify-between",
                                span { "{entry.role} — {entry.company}" }
                                Badge { "{entry.period}" }
                            }
                        }
                        CardContent {
                            ul { class: "list-inside list-disc space-y-2 text-sm text-gray-600",
                                for point in entry.points {
                                    li { "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
