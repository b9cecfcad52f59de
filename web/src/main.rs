use dioxus::prelude::*;

use ui::components::SiteNavbar;
use ui::views::{Home, Login};
use ui::{AuthHandle, HostHandle, InMemoryAuth, NavbarConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/Login")]
    LoginPage {},
}

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Demo session store shared by the navbar and the login page.
    use_context_provider(InMemoryAuth::new);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}

#[cfg(target_arch = "wasm32")]
fn host_events() -> HostHandle {
    HostHandle::browser()
}

// Server/native builds of the web crate have no browser window to listen to.
#[cfg(not(target_arch = "wasm32"))]
fn host_events() -> HostHandle {
    HostHandle::new(ui::ManualEvents::new())
}

/// A web-specific layout around the shared `SiteNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let demo_auth = use_context::<InMemoryAuth>();
    let auth = use_hook(|| AuthHandle::new(demo_auth));
    let host = use_hook(host_events);
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
