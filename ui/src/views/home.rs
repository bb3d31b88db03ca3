use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page--hero page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
        }
    }
}
