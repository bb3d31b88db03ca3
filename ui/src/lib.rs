//! Shared UI crate for the Celacto Pharma site. The navigation header, its
//! model and the page views live here; platform crates own the `Route` enum.

pub mod i18n;
pub mod nav;
pub mod pointer;
pub mod views;

pub mod components {
    // Route-aware site header (components/navigation_header.rs)
    pub mod navigation_header;
    pub use navigation_header::NavigationHeader;
    pub use navigation_header::DESKTOP_DROPDOWN_REGION;

    pub use crate::pointer::PointerRoot;
}
