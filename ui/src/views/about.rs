use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page--hero page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-intro")} }
        }
    }
}
