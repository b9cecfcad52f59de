#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::SiteNavbar;
use ui::views::{Home, Login};
use ui::{AuthHandle, HostHandle, InMemoryAuth, ManualEvents, NavbarConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/Login")]
    LoginPage {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("FusionX – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1200.0, 800.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_context_provider(InMemoryAuth::new);
    // No DOM listeners natively: window resizes and app-level presses are
    // forwarded into this hub instead.
    let host_events = use_context_provider(ManualEvents::new);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::tao::event::{Event, WindowEvent};

        let window = dioxus::desktop::use_window();
        let events = host_events.clone();
        dioxus::desktop::use_wry_event_handler(move |event, _| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                let logical = size.to_logical::<f64>(window.scale_factor());
                events.dispatch_resize(logical.width);
            }
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            class: "app-shell",
            // Runs after element handlers inside the navbar, like a document listener.
            onmousedown: move |_| host_events.dispatch_pointer_down(),
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared `SiteNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    let demo_auth = use_context::<InMemoryAuth>();
    let events = use_context::<ManualEvents>();
    let auth = use_hook(|| AuthHandle::new(demo_auth));
    let host = use_hook(|| HostHandle::new(events));
    let config = use_hook(NavbarConfig::load_bundled);

    rsx! {
        SiteNavbar { config, auth, host }
        Outlet::<Route> {}
    }
}

#[component]
fn LoginPage() -> Element {
    let demo_auth = use_context::<InMemoryAuth>();
    let nav = use_navigator();

    rsx! {
        Login {
            on_sign_in: move |name: String| {
                let user = demo_auth.sign_in(&name);
                tracing::info!(uid = %user.uid, "signed in");
                nav.push(Route::Home {});
            },
        }
    }
}
