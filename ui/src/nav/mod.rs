//! Static navigation table and the route-driven decisions made from it.

mod disclosure;
pub use disclosure::{Disclosure, DisclosureState};

/// One entry of the site navigation. Entries nest at most one level deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    /// Fluent message id of the visible label.
    pub label_key: &'static str,
    pub children: &'static [NavEntry],
}

impl NavEntry {
    const fn leaf(path: &'static str, label_key: &'static str) -> Self {
        Self {
            path,
            label_key,
            children: &[],
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaves match their own path exactly; entries with children match any
    /// of their children's paths, never their own.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.has_children() {
            self.children.iter().any(|child| child.path == current_path)
        } else {
            self.path == current_path
        }
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::leaf("/", "nav-home"),
    NavEntry::leaf("/about", "nav-about"),
    NavEntry {
        path: "/services",
        label_key: "nav-services",
        children: &[
            NavEntry::leaf("/services/global-distribution", "nav-global-distribution"),
            NavEntry::leaf("/services/warehousing", "nav-warehousing"),
        ],
    },
    NavEntry::leaf("/contact", "nav-contact"),
];

/// Pages whose hero image sits behind the header, so the header stays transparent.
pub const HERO_PATHS: &[&str] = &[
    "/",
    "/about",
    "/services/global-distribution",
    "/services/warehousing",
    "/contact",
];

pub fn is_hero_path(path: &str) -> bool {
    HERO_PATHS.contains(&route_path(path))
}

/// Strips any query string or fragment from a rendered route.
pub fn route_path(route: &str) -> &str {
    route
        .split(['?', '#'])
        .next()
        .unwrap_or(route)
}

/// Every navigable path in the header, in menu order.
pub fn link_targets() -> Vec<&'static str> {
    NAV_ENTRIES
        .iter()
        .flat_map(|entry| {
            if entry.has_children() {
                entry.children.iter().map(|child| child.path).collect::<Vec<_>>()
            } else {
                vec![entry.path]
            }
        })
        .collect()
}
