use dioxus::prelude::*;
use crate::components::{ Button, ButtonSize, ButtonVariant };
use crate::content::{ PROFILE, SECTIONS };
use crate::context::AppContext;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme;
    let drawer = ctx.drawer;
    let toggle_icon = theme().toggle_icon();

    let toggle_ctx = ctx.clone();
    let open_ctx = ctx.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "sticky top-0 z-40 w-full border-b border-gray-200 bg-white/90 backdrop-blur shadow-sm",
            div { class: "mx-auto flex max-w-6xl items-center justify-between p-4",
                a { href: "#home", class: "flex items-center gap-2",
                    div { class: "relative z-10 flex h-10 w-10 items-center justify-center rounded-2xl bg-blue-600 text-white shadow",
                        "✦"
                    }
                    span { class: "text-sm font-semibold tracking-wide", "{PROFILE.name}" }
                }

                nav { class: "hidden items-center gap-1 md:flex",
                    for section in SECTIONS {
                        a {
                            key: "{section.id}",
                            href: section.anchor(),
                            class: "px-3 py-2 text-sm font-medium text-gray-700 hover:text-blue-600",
                            "{section.label}"
                        }
                    }
                }

                div { class: "flex items-center gap-2",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Toggle theme",
                        onclick: move |_| toggle_ctx.toggle_theme(),
                        {toggle_icon}
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Icon,
                        class: "md:hidden",
                        aria_label: "Open menu",
                        onclick: move |_| open_ctx.open_drawer(),
                        "☰"
                    }
                }
            }

            if drawer().is_open() {
                NavigationDrawer {}
            }
        }

        Outlet::<Route> {}
    }
}

/// Mobile drawer. Any click on the backdrop, the close button or a link closes it.
#[component]
fn NavigationDrawer() -> Element {
    let ctx = use_context::<AppContext>();
    let backdrop_ctx = ctx.clone();
    let close_ctx = ctx.clone();

    rsx! {
        div {
            class: "fixed inset-0 z-[60] bg-transparent",
            onclick: move |_| backdrop_ctx.close_drawer(),
        }

        aside { class: "drawer fixed right-0 top-0 z-[70] h-screen w-80 max-w-[85vw] bg-black text-white shadow-2xl",
            div { class: "flex items-center justify-between px-4 py-3 border-b border-gray-800",
                h3 { class: "text-lg font-semibold", "Navigate" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: "Close menu",
                    onclick: move |_| close_ctx.close_drawer(),
                    "✕"
                }
            }
            nav { class: "divide-y divide-gray-700",
                for section in SECTIONS {
                    DrawerLink { key: "{section.id}", href: section.anchor(), label: section.label }
                }
            }
        }
    }
}

#[component]
fn DrawerLink(href: String, label: &'static str) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        a {
            href,
            class: "block px-5 py-4 text-base text-gray-200 hover:bg-gray-800 hover:text-white",
            onclick: move |_| ctx.select_destination(),
            "{label}"
        }
    }
}
