use dioxus::prelude::*;

use crate::i18n;
use crate::nav::{self, DisclosureState, NavEntry, NAV_ENTRIES};
use crate::pointer::{use_outside_pointer_down, PointerSource};
use crate::t;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

const LOGO: Asset = asset!("/assets/images/celacto-logo.svg");

/// Element id wrapping the desktop dropdown trigger and menu.
pub const DESKTOP_DROPDOWN_REGION: &str = "site-header-dropdown";

/// Hero pages get a transparent header; everything else an opaque, blurred one.
pub fn header_class(current_path: &str) -> &'static str {
    if nav::is_hero_path(current_path) {
        "site-header site-header--transparent"
    } else {
        "site-header site-header--solid"
    }
}

fn pill_class(active: bool) -> &'static str {
    if active {
        "site-header__pill site-header__pill--active"
    } else {
        "site-header__pill"
    }
}

fn dropdown_item_class(active: bool) -> &'static str {
    if active {
        "site-header__dropdown-item site-header__dropdown-item--active"
    } else {
        "site-header__dropdown-item"
    }
}

fn chevron_class(rotated: bool) -> &'static str {
    if rotated {
        "site-header__chevron site-header__chevron--open"
    } else {
        "site-header__chevron"
    }
}

/// Fixed site header with desktop dropdown navigation and a mobile slide-down
/// panel. `current_path` is the rendered current route.
#[component]
pub fn NavigationHeader(current_path: String) -> Element {
    i18n::init();

    let mut disclosure = use_signal(DisclosureState::default);
    let pointer = use_outside_pointer_down(DESKTOP_DROPDOWN_REGION, move || {
        dismiss_desktop_dropdown(disclosure);
    });

    let path = nav::route_path(&current_path);
    let state = disclosure();
    let logo_alt = t!("logo-alt");
    let menu_label = t!("nav-menu-toggle");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { class: header_class(path),
            nav { class: "site-header__bar",
                Link { class: "site-header__logo", to: "/",
                    img { src: LOGO, alt: "{logo_alt}" }
                }

                button {
                    class: "site-header__menu-toggle",
                    r#type: "button",
                    aria_label: "{menu_label}",
                    aria_expanded: "{state.menu.is_open()}",
                    onclick: move |_| disclosure.with_mut(DisclosureState::toggle_menu),
                    div { class: "site-header__burger",
                        span {}
                        span {}
                        span {}
                    }
                }

                div { class: "site-header__desktop",
                    for entry in NAV_ENTRIES.iter() {
                        if entry.has_children() {
                            {desktop_dropdown(entry, path, state, disclosure, pointer.clone())}
                        } else {
                            Link {
                                key: "{entry.path}",
                                class: pill_class(entry.is_active(path)),
                                to: entry.path,
                                {i18n::tr(entry.label_key)}
                            }
                        }
                    }
                }
            }

            if state.menu.is_open() {
                {mobile_panel(path, state, disclosure)}
            }
        }
    }
}

/// Outside pointer-down handler. Only writes the signal when the dropdown is
/// open; returns whether it closed anything.
fn dismiss_desktop_dropdown(mut disclosure: Signal<DisclosureState>) -> bool {
    if !disclosure.peek().desktop_dropdown.is_open() {
        return false;
    }
    disclosure.with_mut(DisclosureState::pointer_down_outside);
    true
}

fn desktop_dropdown(
    entry: &'static NavEntry,
    path: &str,
    state: DisclosureState,
    mut disclosure: Signal<DisclosureState>,
    pointer: Option<PointerSource>,
) -> Element {
    let open = state.desktop_dropdown.is_open();

    rsx! {
        div {
            key: "{entry.path}",
            id: DESKTOP_DROPDOWN_REGION,
            class: "site-header__dropdown",
            onmousedown: move |_| {
                if let Some(pointer) = pointer.as_ref() {
                    pointer.mark_inside(DESKTOP_DROPDOWN_REGION);
                }
            },
            button {
                class: pill_class(entry.is_active(path)),
                r#type: "button",
                aria_haspopup: "true",
                aria_expanded: "{open}",
                onclick: move |_| disclosure.with_mut(DisclosureState::toggle_desktop_dropdown),
                {i18n::tr(entry.label_key)}
                {chevron(false)}
            }

            if open {
                div { class: "site-header__dropdown-menu",
                    for child in entry.children.iter() {
                        Link {
                            key: "{child.path}",
                            class: dropdown_item_class(child.is_active(path)),
                            to: child.path,
                            onclick: move |_| disclosure.with_mut(DisclosureState::select_desktop_child),
                            {i18n::tr(child.label_key)}
                        }
                    }
                }
            }
        }
    }
}

fn mobile_panel(
    path: &str,
    state: DisclosureState,
    mut disclosure: Signal<DisclosureState>,
) -> Element {
    let dropdown_open = state.mobile_dropdown.is_open();

    rsx! {
        div { class: "site-header__mobile",
            div { class: "site-header__mobile-list",
                for entry in NAV_ENTRIES.iter() {
                    if entry.has_children() {
                        div { key: "{entry.path}", class: "site-header__mobile-group",
                            button {
                                class: "site-header__mobile-trigger",
                                r#type: "button",
                                aria_expanded: "{dropdown_open}",
                                onclick: move |_| disclosure.with_mut(DisclosureState::toggle_mobile_dropdown),
                                {i18n::tr(entry.label_key)}
                                {chevron(dropdown_open)}
                            }

                            if dropdown_open {
                                div { class: "site-header__mobile-children",
                                    for child in entry.children.iter() {
                                        Link {
                                            key: "{child.path}",
                                            class: dropdown_item_class(child.is_active(path)),
                                            to: child.path,
                                            onclick: move |_| disclosure.with_mut(DisclosureState::select_mobile_child),
                                            {i18n::tr(child.label_key)}
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        Link {
                            key: "{entry.path}",
                            class: "site-header__mobile-link",
                            to: entry.path,
                            onclick: move |_| disclosure.with_mut(DisclosureState::select_mobile_leaf),
                            {i18n::tr(entry.label_key)}
                        }
                    }
                }
            }
        }
    }
}

fn chevron(rotated: bool) -> Element {
    rsx! {
        svg {
            class: chevron_class(rotated),
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "m6 9 6 6 6-6",
            }
        }
    }
}
