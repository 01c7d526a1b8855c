use dioxus::prelude::*;
use super::{ About, Contact, ExperienceList, Footer, Hero, Projects, Skills };

/// The whole portfolio: every section stacked on one page.
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            Hero {}
            About {}
            Projects {}
            ExperienceList {}
            Skills {}
            Contact {}
        }
        Footer {}
    }
}
