use dioxus::prelude::*;
use crate::components::{ Button, ButtonVariant };
use crate::content::PROFILE;
use crate::context::AppContext;

#[component]
pub fn Hero() -> Element {
    let ctx = use_context::<AppContext>();
    let recipient = ctx.contact.recipient().to_string();

    rsx! {
        section { id: "home", class: "mx-auto max-w-6xl px-4 pt-20 pb-12 md:pt-28",
            div { class: "grid items-center gap-10 md:grid-cols-2",
                div {
                    h1 { class: "text-4xl font-extrabold tracking-tight sm:text-5xl",
                        "Hi, I’m "
                        span { class: "text-blue-600", "{PROFILE.name}" }
                    }
                    p { class: "mt-4 text-base leading-relaxed text-gray-600",
                        "Cybersecurity and Networking student at the Canadian College of Technology and Business. I’m passionate about ethical hacking, secure system design, and hands-on network defense."
                    }
                    div { class: "mt-6 flex flex-wrap items-center gap-3",
                        Button { href: "#projects", "🚀 Explore Projects" }
                        Button { variant: ButtonVariant::Outline, href: "#contact", "✉ Contact" }
                        Button { variant: ButtonVariant::Ghost, href: PROFILE.resume, "⬇ Download Résumé" }
                    }
                    div { class: "mt-6 flex gap-3 text-gray-500",
                        a {
                            class: "hover:text-gray-900",
                            href: PROFILE.github,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "GitHub",
                            "GitHub"
                        }
                        a {
                            class: "hover:text-gray-900",
                            href: PROFILE.linkedin,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "LinkedIn",
                            "LinkedIn"
                        }
                        a {
                            class: "hover:text-gray-900",
                            href: "mailto:{recipient}",
                            "aria-label": "Email",
                            "Email"
                        }
                    }
                }
                div { class: "relative",
                    div { class: "relative aspect-square w-full overflow-hidden rounded-3xl border border-gray-200 p-1 shadow-xl",
                        div { class: "relative z-10 grid h-full place-items-center rounded-3xl bg-white/80 p-6",
                            span { class: "text-8xl opacity-80", "🛡" }
                        }
                    }
                }
            }
        }
    }
}
