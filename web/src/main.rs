use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{NavigationHeader, PointerRoot};
use ui::views::{About, Contact, GlobalDistribution, Home, PageNotFound, Warehousing};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services/global-distribution")]
    GlobalDistribution {},
    #[route("/services/warehousing")]
    Warehousing {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

// Shared theme lives in the ui crate; inlined so the web bundle needs no copy of it.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared header driven by the web `Route` enum.
#[component]
fn WebLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        PointerRoot {
            NavigationHeader { current_path: route.to_string() }
            main { class: "site-main", Outlet::<Route> {} }
        }
    }
}
