use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Catch-all page; `segments` is the unmatched path.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    debug!(path = %format!("/{}", segments.join("/")), "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-intro")} }
            Link { class: "button button--primary", to: "/", {crate::t!("not-found-back")} }
        }
    }
}
