#![cfg(test)]
/*!
Navbar stylesheet lint.

`SiteNavbar` embeds `ui/assets/styling/navbar.css` inline in release desktop
builds, so a renamed or dropped selector only shows up as broken layout at
runtime. This checks that the classes the component emits still have rules.

If you rename a class in `ui/src/components/site_navbar.rs` or
`ui/src/navbar/view.rs`, update REQUIRED_SELECTORS too.
*/

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand",
    ".navbar__links--desktop",
    ".navbar__list",
    ".navbar__item {",
    ".navbar__item--active",
    ".navbar__link",
    ".navbar__end",
    ".navbar__account {",
    ".navbar__account-control",
    ".navbar__chevron",
    ".navbar__chevron--flipped",
    ".navbar__dropdown {",
    ".navbar__dropdown-link",
    ".navbar__notice--error",
    ".navbar__cta--desktop",
    ".navbar__cta--mobile",
    ".navbar__menu-toggle",
    ".navbar__collapse--open",
    ".navbar__collapse--closed",
];

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required selectors in navbar.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn desktop_breakpoint_matches_viewport_constant() {
    let query = format!("@media (min-width: {}px)", ui::core::viewport::BREAKPOINT_PX);
    assert!(
        NAVBAR_CSS.contains(&query),
        "navbar.css has no `{query}` block; the CSS and Rust breakpoints have drifted"
    );
}
