#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) and the header stylesheet
//! stay present and keep the selectors the Rust components emit.
//!
//! If you rename a class in `ui/src/components/navigation_header.rs`, update
//! the stylesheet and the lists below together.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));

const HEADER_SELECTORS: &[&str] = &[
    ".pointer-root",
    ".site-header {",
    ".site-header--transparent",
    ".site-header--solid",
    ".site-header__logo",
    ".site-header__menu-toggle",
    ".site-header__desktop",
    ".site-header__pill",
    ".site-header__pill--active",
    ".site-header__dropdown {",
    ".site-header__dropdown-menu",
    ".site-header__dropdown-item",
    ".site-header__dropdown-item--active",
    ".site-header__chevron--open",
    ".site-header__mobile {",
    ".site-header__mobile-link",
    ".site-header__mobile-trigger",
    ".site-header__mobile-children",
    // Desktop and mobile trees are switched by this breakpoint alone.
    "@media (min-width: 768px)",
];

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_defines_header_color_tokens() {
    for token in [
        "--color-border",
        "--color-primary-50",
        "--color-primary-600",
        "--color-primary-700",
        "body {",
    ] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn pointer_root_fills_the_viewport() {
    let start = HEADER_CSS
        .find(".pointer-root {")
        .expect("`.pointer-root` rule missing");
    let rule = &HEADER_CSS[start..];
    let rule = &rule[..rule.find('}').expect("unterminated `.pointer-root` rule")];

    for decl in ["width: 100%", "min-height: 100vh"] {
        assert!(rule.contains(decl), "`.pointer-root` lost `{decl}`");
    }
}

#[test]
fn header_stylesheet_contains_required_selectors() {
    let missing: Vec<_> = HEADER_SELECTORS
        .iter()
        .filter(|sel| !HEADER_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} header selectors:\n{:?}",
        missing.len(),
        missing
    );
}
