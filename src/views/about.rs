use dioxus::prelude::*;
use crate::components::{ Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, SectionHeader };
use crate::content::QUICK_FACTS;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "mx-auto max-w-6xl px-4 py-16",
            SectionHeader { eyebrow: "About", title: "A bit about me", icon: "🎓" }
            div { class: "grid gap-6 md:grid-cols-3",
                Card { class: "md:col-span-2",
                    CardHeader { CardTitle { "Who I am" } }
                    CardContent { class: "space-y-4 text-sm leading-relaxed text-gray-600",
                        p {
                            "I’m a cybersecurity student with hands-on experience in vulnerability assessments, penetration testing, and secure web server deployment. I enjoy tackling challenges that combine technical depth with problem solving."
                        }
                        p {
                            "My recent focus has been on practical labs at CCTB — working with Kali Linux, Cisco Packet Tracer, and security tools to simulate real-world attack and defense scenarios."
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Quick facts" } }
                    CardContent { class: "flex flex-wrap gap-2",
                        for fact in QUICK_FACTS {
                            Badge { key: "{fact}", variant: BadgeVariant::Secondary, "{fact}" }
                        }
                    }
                }
            }
        }
    }
}
