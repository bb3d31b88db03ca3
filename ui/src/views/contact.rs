use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page--hero page-contact",
            h1 { {crate::t!("contact-title")} }
            p { {crate::t!("contact-intro")} }
        }
    }
}
