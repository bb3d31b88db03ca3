//! The two service pages listed under the Services dropdown.

use dioxus::prelude::*;

#[component]
pub fn GlobalDistribution() -> Element {
    rsx! {
        section { class: "page page--hero page-service",
            h1 { {crate::t!("global-distribution-title")} }
            p { {crate::t!("global-distribution-intro")} }
        }
    }
}

#[component]
pub fn Warehousing() -> Element {
    rsx! {
        section { class: "page page--hero page-service",
            h1 { {crate::t!("warehousing-title")} }
            p { {crate::t!("warehousing-intro")} }
        }
    }
}
