//! Signup tab
//!
//! Accounts are validated but not created anywhere.

use dioxus::prelude::*;
use hopehands_core::forms::{SignupForm, MIN_PASSWORD_LENGTH};
use hopehands_core::SiteConfig;

use super::login::INPUT_CLASS;
use super::AuthPanel;
use crate::auth::use_auth;
use crate::components::LoadingDots;
use crate::delay::simulate_latency;
use crate::state::AuthTab;

/// `/signup`
#[component]
pub fn Signup() -> Element {
    rsx! {
        AuthPanel { initial: AuthTab::Signup }
    }
}

#[component]
pub(super) fn CreateAccountForm(on_created: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_context::<SiteConfig>();
    let latency = config.signup_latency;

    let mut form = use_signal(SignupForm::default);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        if is_pending() {
            return;
        }

        // Rejected forms never reach the simulated request
        let validation = auth.service.signup(&form.read());
        if let Err(e) = validation {
            error.set(Some(e.to_string()));
            return;
        }

        is_pending.set(true);
        error.set(None);

        spawn(async move {
            simulate_latency(latency).await;

            form.set(SignupForm::default());
            is_pending.set(false);
            on_created.call(());
        });
    };

    rsx! {
        div {
            class: "text-center mb-4",
            span {
                class: "inline-block px-2 py-0.5 rounded-full border text-xs",
                "Member Registration Only"
            }
            p {
                class: "text-sm text-gray-500 mt-2",
                "Admin accounts are created by existing administrators"
            }
        }

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
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Full Name" }
                input {
                    value: form.read().full_name.clone(),
                    oninput: move |e| {
                        form.write().full_name = e.value();
                        error.set(None);
                    },
                    placeholder: "Enter your full name",
                    class: INPUT_CLASS,
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Email Address" }
                input {
                    r#type: "email",
                    value: form.read().email.clone(),
                    oninput: move |e| {
                        form.write().email = e.value();
                        error.set(None);
                    },
                    placeholder: "Enter your email",
                    class: INPUT_CLASS,
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Password" }
                div {
                    class: "relative",
                    input {
                        r#type: if show_password() { "text" } else { "password" },
                        value: form.read().password.clone(),
                        oninput: move |e| {
                            form.write().password = e.value();
                            error.set(None);
                        },
                        placeholder: "Create a password",
                        class: INPUT_CLASS,
                    }
                    button {
                        r#type: "button",
                        class: "absolute right-3 top-2 text-xs text-gray-500",
                        onclick: move |_| show_password.toggle(),
                        if show_password() { "Hide" } else { "Show" }
                    }
                }
                p {
                    class: "text-xs text-gray-500 mt-1",
                    "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Confirm Password" }
                div {
                    class: "relative",
                    input {
                        r#type: if show_confirm() { "text" } else { "password" },
                        value: form.read().confirm_password.clone(),
                        oninput: move |e| {
                            form.write().confirm_password = e.value();
                            error.set(None);
                        },
                        placeholder: "Confirm your password",
                        class: INPUT_CLASS,
                    }
                    button {
                        r#type: "button",
                        class: "absolute right-3 top-2 text-xs text-gray-500",
                        onclick: move |_| show_confirm.toggle(),
                        if show_confirm() { "Hide" } else { "Show" }
                    }
                }
            }

            button {
                r#type: "submit",
                class: "w-full bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: is_pending(),
                if is_pending() {
                    "Creating Account"
                    LoadingDots {}
                } else {
                    "Create Account"
                }
            }
        }
    }
}
