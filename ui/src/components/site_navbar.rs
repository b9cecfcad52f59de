use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::auth::AuthHandle;
use crate::config::NavbarConfig;
use crate::host::HostHandle;
use crate::navbar::{
    AccountMenu, MenuGlyph, NavDispatch, NavEvent, NavLinkView, NavbarSession, NavbarState,
    NavbarView, SignOutStatus,
};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Responsive site header: brand, navigation list, account menu, call to
/// action and the mobile collapse.
///
/// `auth` and `host` are injected so the component owns the lifetime of what
/// it subscribes to. All three listeners (auth observer, document pointer-down,
/// window resize) are registered once after the first render and released
/// together when the component unmounts.
///
/// ```ignore
/// SiteNavbar {
///     config: NavbarConfig::fusionx()?,
///     auth: AuthHandle::new(InMemoryAuth::new()),
///     host: HostHandle::browser(),
/// }
/// ```
#[component]
pub fn SiteNavbar(config: NavbarConfig, auth: AuthHandle, host: HostHandle) -> Element {
    crate::i18n::init();

    let mut state = use_signal(NavbarState::new);
    let session: Rc<RefCell<Option<NavbarSession>>> = use_hook(|| Rc::new(RefCell::new(None)));
    let dispatch: NavDispatch = use_hook(|| {
        Rc::new(move |event: NavEvent| {
            let mut state = state;
            state.write().apply(event);
        }) as NavDispatch
    });

    {
        let session = session.clone();
        let auth = auth.clone();
        let host = host.clone();
        use_effect(move || {
            let mut slot = session.borrow_mut();
            if slot.is_none() {
                *slot = Some(NavbarSession::acquire(&*auth, &*host, dispatch.clone()));
            }
        });
    }

    use_drop(move || {
        drop(session.borrow_mut().take());
    });

    let sign_out = move |_: MouseEvent| {
        state.write().apply(NavEvent::SignOutStarted);
        let pending = auth.sign_out();
        spawn(async move {
            let outcome = pending.await;
            if let Err(err) = &outcome {
                tracing::warn!(%err, "sign-out failed");
            }
            state.write().apply(NavEvent::SignOutSettled(outcome));
        });
    };

    let view = NavbarView::build(&config, &state.read());

    let account = match view.account {
        AccountMenu::LoginLink => rsx! {
            a { class: "{view.account_class}", href: "{view.login_href}", {t!("nav-log-in")} }
        },
        AccountMenu::Dropdown { open } => {
            let chevron_class = view.chevron_class();
            let trigger_label = view
                .user_label
                .clone()
                .unwrap_or_else(|| t!("nav-account"));
            rsx! {
                div {
                    class: "navbar__account",
                    onmousedown: move |_| state.write().apply(NavEvent::DropdownPointerDown),
                    button {
                        id: "navbar-account-trigger",
                        r#type: "button",
                        class: "{view.account_class}",
                        aria_haspopup: "menu",
                        aria_expanded: "{open}",
                        onclick: move |_| state.write().apply(NavEvent::DropdownTriggerClicked),
                        "{trigger_label}"
                        ChevronIcon { class: chevron_class }
                    }
                    if open {
                        div {
                            id: "navbar-account-panel",
                            class: "navbar__dropdown",
                            ul {
                                class: "navbar__dropdown-list",
                                aria_labelledby: "navbar-account-trigger",
                                li {
                                    a { class: "navbar__dropdown-link", href: "#", {t!("nav-dashboard")} }
                                }
                                li {
                                    a { class: "navbar__dropdown-link", href: "#", {t!("nav-settings")} }
                                }
                            }
                            div { class: "navbar__dropdown-footer",
                                button {
                                    r#type: "button",
                                    class: "navbar__dropdown-link navbar__logout",
                                    disabled: view.sign_out == SignOutStatus::Pending,
                                    onclick: sign_out,
                                    {t!("nav-log-out")}
                                    LogoutIcon {}
                                }
                                {sign_out_notice(&view.sign_out)}
                            }
                        }
                    }
                }
            }
        }
    };

    let menu_label = match view.menu_glyph {
        MenuGlyph::Menu => t!("nav-menu-open"),
        MenuGlyph::Close => t!("nav-menu-close"),
    };
    let mobile_open = view.mobile_nav.is_open();
    let collapse_class = view.collapse_class();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "{view.brand_href}", "{view.brand}" }

                nav {
                    class: "navbar__links navbar__links--desktop",
                    aria_label: t!("nav-primary"),
                    NavList { links: view.desktop_links.clone() }
                }

                div { class: "navbar__end",
                    {account}
                    button { r#type: "button", class: "navbar__cta navbar__cta--desktop",
                        span { "{view.cta_label}" }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_label: "{menu_label}",
                        aria_expanded: "{mobile_open}",
                        aria_controls: "navbar-collapse",
                        onclick: move |_| state.write().apply(NavEvent::MobileTriggerClicked),
                        MenuIcon { glyph: view.menu_glyph }
                    }
                }
            }

            div {
                id: "navbar-collapse",
                class: "{collapse_class}",
                aria_hidden: !mobile_open,
                NavList { links: view.mobile_links.clone() }
                button { r#type: "button", class: "navbar__cta navbar__cta--mobile",
                    span { "{view.cta_label}" }
                }
            }
        }
    }
}

fn sign_out_notice(status: &SignOutStatus) -> Element {
    match status {
        SignOutStatus::Idle => rsx! {},
        SignOutStatus::Pending => rsx! {
            p { class: "navbar__notice", {t!("sign-out-pending")} }
        },
        SignOutStatus::Failed(reason) => rsx! {
            p { class: "navbar__notice navbar__notice--error", role: "alert",
                {t!("sign-out-failed", reason = reason.as_str())}
            }
        },
    }
}

#[component]
fn NavList(links: Vec<NavLinkView>) -> Element {
    rsx! {
        ul { class: "navbar__list",
            for (index, link) in links.into_iter().enumerate() {
                li { key: "{index}", class: "{link.class}",
                    a { class: "navbar__link", href: "{link.href}", "{link.text}" }
                }
            }
        }
    }
}

#[component]
fn ChevronIcon(class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "aria-hidden": "true",
            fill: "none",
            view_box: "0 0 10 6",
            path {
                stroke: "currentColor",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "m1 1 4 4 4-4",
            }
        }
    }
}

#[component]
fn MenuIcon(glyph: MenuGlyph) -> Element {
    let d = match glyph {
        MenuGlyph::Menu => "M3 6h18M9 12h12M3 18h18",
        MenuGlyph::Close => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm3.5 13.5-1 1L12 13l-2.5 2.5-1-1L11 12 8.5 9.5l1-1L12 11l2.5-2.5 1 1L13 12z",
    };
    let (fill, stroke) = match glyph {
        MenuGlyph::Menu => ("none", "currentColor"),
        MenuGlyph::Close => ("currentColor", "none"),
    };

    rsx! {
        svg {
            class: "navbar__menu-icon",
            "aria-hidden": "true",
            view_box: "0 0 24 24",
            fill: fill,
            stroke: stroke,
            stroke_width: "1.5",
            stroke_linecap: "round",
            path { d: d }
        }
    }
}

#[component]
fn LogoutIcon() -> Element {
    rsx! {
        svg {
            class: "navbar__logout-icon",
            "aria-hidden": "true",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M14 8V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h7a2 2 0 0 0 2-2v-2" }
            path { d: "M9 12h12l-3-3M18 15l3-3" }
        }
    }
}
