//! Render-ready description of the bar.
//!
//! `SiteNavbar` draws straight from [`NavbarView`]; keeping the branching here
//! lets tests check what would be rendered without a DOM.

use super::state::{AccountMenu, NavbarState, SignOutStatus};
use crate::config::{NavItem, NavbarConfig};
use crate::core::disclosure::Disclosure;

/// Base class of the auth-dependent control (Log In link or account trigger).
pub const AUTH_CONTROL_CLASS: &str = "navbar__account-control";

#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkView {
    pub text: String,
    pub href: String,
    pub active: bool,
    pub class: String,
}

impl NavLinkView {
    fn from_item(item: &NavItem) -> Self {
        let mut class = String::from("navbar__item");
        if item.active {
            class.push_str(" navbar__item--active");
        }
        push_extra(&mut class, item.class.as_deref());
        Self {
            text: item.text.clone(),
            href: item.link.clone(),
            active: item.active,
            class,
        }
    }
}

/// Entries for one navigation list, in configuration order.
pub fn nav_links(config: &NavbarConfig) -> Vec<NavLinkView> {
    config.nav_items.iter().map(NavLinkView::from_item).collect()
}

/// Icon shown on the mobile menu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGlyph {
    Menu,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarView {
    pub brand: String,
    pub brand_href: String,
    pub desktop_links: Vec<NavLinkView>,
    pub mobile_links: Vec<NavLinkView>,
    pub account: AccountMenu,
    pub account_class: String,
    pub login_href: String,
    pub user_label: Option<String>,
    pub sign_out: SignOutStatus,
    pub cta_label: String,
    pub mobile_nav: Disclosure,
    pub menu_glyph: MenuGlyph,
}

impl NavbarView {
    pub fn build(config: &NavbarConfig, state: &NavbarState) -> Self {
        let mut account_class = String::from(AUTH_CONTROL_CLASS);
        push_extra(&mut account_class, config.class.as_deref());

        Self {
            brand: config.brand.clone(),
            brand_href: config.brand_href.clone(),
            desktop_links: nav_links(config),
            mobile_links: nav_links(config),
            account: state.account_menu(),
            account_class,
            login_href: config.login_href.clone(),
            user_label: state.user.as_ref().map(|u| u.label().to_string()),
            sign_out: state.sign_out.clone(),
            cta_label: config.button_text.clone(),
            mobile_nav: state.mobile_nav,
            menu_glyph: if state.mobile_nav.is_open() {
                MenuGlyph::Close
            } else {
                MenuGlyph::Menu
            },
        }
    }

    pub fn collapse_class(&self) -> String {
        format!(
            "navbar__collapse navbar__collapse--{}",
            self.mobile_nav.css_modifier()
        )
    }

    pub fn chevron_class(&self) -> &'static str {
        match self.account {
            AccountMenu::Dropdown { open: true } => "navbar__chevron navbar__chevron--flipped",
            _ => "navbar__chevron",
        }
    }
}

fn push_extra(class: &mut String, extra: Option<&str>) {
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
}
