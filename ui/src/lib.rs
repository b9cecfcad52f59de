//! Shared UI crate for FusionX: the site navbar, its state machine and the
//! pieces it is injected with (auth provider, host listeners, configuration).

pub mod auth;
pub mod config;
pub mod core;
pub mod host;
pub mod i18n;
pub mod navbar;
pub mod views;

pub mod components {
    mod site_navbar;
    pub use site_navbar::SiteNavbar;
}

use dioxus::prelude::*;

/// Shared page theme (body, page shell, buttons, login form).
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

pub use auth::{AuthHandle, AuthProvider, AuthUser, InMemoryAuth};
pub use config::{NavItem, NavbarConfig};
pub use host::{HostEvents, HostHandle, ManualEvents};

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
