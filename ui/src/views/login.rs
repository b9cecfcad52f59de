use dioxus::prelude::*;

use crate::t;

/// Minimal login form. The shell decides what signing in means.
#[component]
pub fn Login(on_sign_in: EventHandler<String>) -> Element {
    let mut name = use_signal(String::new);

    rsx! {
        section { class: "page page-login",
            h1 { {t!("login-title")} }
            form {
                class: "login-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_sign_in.call(name());
                },
                label { r#for: "login-name", {t!("login-name-label")} }
                input {
                    id: "login-name",
                    r#type: "text",
                    autocomplete: "name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                button { r#type: "submit", class: "button button--primary", {t!("login-submit")} }
            }
        }
    }
}
