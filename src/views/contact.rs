use dioxus::prelude::*;
use crate::components::{ Button, Card, CardContent, CardHeader, CardTitle, SectionHeader, TextArea, TextInput };
use crate::content::PROFILE;
use crate::context::AppContext;
use crate::services::ContactFormSubmission;

#[component]
pub fn Contact() -> Element {
    let ctx = use_context::<AppContext>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| None::<&'static str>);

    let recipient = ctx.contact.recipient().to_string();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let submission = ContactFormSubmission::new(name(), email(), message());
        let text = match ctx.submit_contact(&submission) {
            Some(_) => "Your mail client should open with the message ready to send.",
            None => "Please fill in your name, email and message.",
        };
        status.set(Some(text));
    };

    rsx! {
        section { id: "contact", class: "mx-auto max-w-6xl px-4 py-16",
            SectionHeader { eyebrow: "Say hi", title: "Let’s work together", icon: "✉" }
            div { class: "grid gap-6 md:grid-cols-2",
                Card {
                    CardHeader { CardTitle { "Send a message" } }
                    CardContent {
                        form { class: "grid gap-3", onsubmit: submit,
                            div { class: "grid gap-2",
                                label { class: "text-sm", r#for: "name", "Name" }
                                TextInput {
                                    id: "name",
                                    placeholder: "Your name",
                                    value: name(),
                                    oninput: move |evt: FormEvent| name.set(evt.value()),
                                }
                            }
                            div { class: "grid gap-2",
                                label { class: "text-sm", r#for: "email", "Email" }
                                TextInput {
                                    id: "email",
                                    kind: "email",
                                    placeholder: "you@example.com",
                                    value: email(),
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                }
                            }
                            div { class: "grid gap-2",
                                label { class: "text-sm", r#for: "message", "Message" }
                                TextArea {
                                    id: "message",
                                    placeholder: "What can I build for you?",
                                    value: message(),
                                    oninput: move |evt: FormEvent| message.set(evt.value()),
                                }
                            }
                            Button { kind: "submit", class: "justify-center", "Send" }
                            if let Some(text) = status() {
                                p { class: "text-sm text-gray-600", role: "status", "{text}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Details" } }
                    CardContent { class: "space-y-3 text-sm text-gray-600",
                        p {
                            "Currently open to co-op, internship, and entry-level opportunities in Cybersecurity & Networking."
                        }
                        a {
                            href: "mailto:{recipient}",
                            class: "flex items-center gap-3 hover:underline",
                            span { "{recipient}" }
                        }
                        a {
                            href: PROFILE.linkedin,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "flex items-center gap-3 hover:underline",
                            span { "linkedin.com/in/ankit-khatiwada-4916bb278" }
                        }
                        a {
                            href: PROFILE.github,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "flex items-center gap-3 hover:underline",
                            span { "github.com/ankitkhatiwada" }
                        }
                    }
                }
            }
        }
    }
}
