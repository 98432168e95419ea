//! Login tab

use dioxus::prelude::*;
use hopehands_core::{Credentials, Role, SiteConfig};

use super::AuthPanel;
use crate::auth::use_auth;
use crate::components::LoadingDots;
use crate::delay::simulate_latency;
use crate::routes::Route;
use crate::state::AuthTab;

pub(super) const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500";

/// `/login`
#[component]
pub fn Login() -> Element {
    rsx! {
        AuthPanel { initial: AuthTab::Login }
    }
}

#[component]
pub(super) fn LoginForm() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let config = use_context::<SiteConfig>();
    let latency = config.login_latency;

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        if is_pending() {
            return;
        }

        let credentials = Credentials::new(email(), password(), role());
        let service = auth.service.clone();

        // Set before the task starts so a second submit sees it
        is_pending.set(true);
        error.set(None);

        spawn(async move {
            simulate_latency(latency).await;

            match service.login(credentials).await {
                Ok(page) => {
                    is_pending.set(false);
                    navigator.push(Route::from(page));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Login rejected");
                    error.set(Some(e.to_string()));
                    is_pending.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div {
                    class: "p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                    "{err}"
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Email Address" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| {
                        email.set(e.value());
                        error.set(None);
                    },
                    placeholder: "Enter your email",
                    class: INPUT_CLASS,
                    disabled: is_pending()
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Password" }
                div {
                    class: "relative",
                    input {
                        r#type: if show_password() { "text" } else { "password" },
                        value: "{password}",
                        oninput: move |e| {
                            password.set(e.value());
                            error.set(None);
                        },
                        placeholder: "Enter your password",
                        class: INPUT_CLASS,
                        disabled: is_pending()
                    }
                    button {
                        r#type: "button",
                        class: "absolute right-3 top-2 text-xs text-gray-500",
                        onclick: move |_| show_password.toggle(),
                        if show_password() { "Hide" } else { "Show" }
                    }
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Login As" }
                select {
                    class: INPUT_CLASS,
                    value: role().as_str(),
                    onchange: move |e| role.set(Role::parse(&e.value()).unwrap_or_default()),
                    for option_role in Role::variants().iter().copied() {
                        option {
                            value: option_role.as_str(),
                            selected: option_role == role(),
                            {option_role.label()}
                        }
                    }
                }
            }

            button {
                r#type: "submit",
                class: "w-full bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: is_pending(),
                if is_pending() {
                    "Signing In"
                    LoadingDots {}
                } else {
                    "Sign In"
                }
            }
        }
    }
}
