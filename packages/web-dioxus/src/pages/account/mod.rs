//! Login and signup pages
//!
//! Both routes render the same panel; only the opening tab differs.

mod login;
mod signup;

use dioxus::prelude::*;
use hopehands_core::auth::{DEMO_ACCOUNTS, DONOR_PASSWORD_PREFIX};

use crate::routes::Route;
use crate::state::AuthTab;
use login::LoginForm;
use signup::CreateAccountForm;

pub use login::Login;
pub use signup::Signup;

const SIGNUP_SUCCESS: &str = "Account created successfully! You can now log in.";

#[component]
fn AuthPanel(initial: AuthTab) -> Element {
    let mut tab = use_signal(|| initial);
    let mut notice = use_signal(|| None::<&'static str>);

    let tabs = AuthTab::variants().iter().copied().map(|t| {
        let label = t.label();
        let class = if tab() == t {
            "flex-1 py-2 text-sm font-medium rounded-md bg-white shadow-sm text-emerald-700"
        } else {
            "flex-1 py-2 text-sm font-medium rounded-md text-gray-500 hover:text-gray-700"
        };
        rsx! {
            button {
                key: "{label}",
                r#type: "button",
                class: class,
                onclick: move |_| tab.set(t),
                "{label}"
            }
        }
    });

    rsx! {
        section {
            class: "py-20 min-h-screen bg-gradient-to-br from-emerald-50 via-white to-amber-50",
            div {
                class: "container mx-auto px-4 grid lg:grid-cols-2 gap-12 items-start max-w-6xl",

                // Left side: information and demo credentials
                div {
                    class: "space-y-8",
                    div {
                        class: "space-y-4",
                        h1 {
                            class: "text-4xl md:text-5xl font-bold leading-tight",
                            "Welcome to "
                            span { class: "text-emerald-700", "HopeHands" }
                        }
                        p {
                            class: "text-xl text-gray-500",
                            "Join our global community of changemakers creating positive impact in communities worldwide."
                        }
                    }

                    div {
                        class: "p-6 bg-gray-50 rounded-lg",
                        h3 { class: "font-semibold mb-2", "New to HopeHands?" }
                        p {
                            class: "text-sm text-gray-500 mb-4",
                            "Create your member account to access our community, projects, and resources."
                        }
                        Link {
                            to: Route::Membership {},
                            class: "text-emerald-700 hover:underline text-sm font-medium",
                            "Learn more about membership \u{2192}"
                        }
                    }

                    DemoCredentials {}
                }

                // Right side: auth forms
                div {
                    class: "max-w-md mx-auto w-full bg-white rounded-lg shadow-md p-8 space-y-6",
                    h2 { class: "text-2xl font-bold text-center", "Access Your Account" }

                    div {
                        class: "flex bg-gray-100 rounded-lg p-1",
                        {tabs}
                    }

                    if let Some(message) = notice() {
                        div {
                            class: "p-4 bg-green-50 border border-green-200 rounded-lg text-green-800 text-sm",
                            "{message}"
                        }
                    }

                    match tab() {
                        AuthTab::Login => rsx! { LoginForm {} },
                        AuthTab::Signup => rsx! {
                            CreateAccountForm {
                                on_created: move |_| {
                                    notice.set(Some(SIGNUP_SUCCESS));
                                    tab.set(AuthTab::Login);
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn DemoCredentials() -> Element {
    rsx! {
        div {
            class: "p-6 bg-blue-50 border border-blue-200 rounded-lg",
            h3 { class: "font-semibold mb-2 text-blue-800", "Demo Credentials" }
            div {
                class: "space-y-3 text-sm",
                for account in DEMO_ACCOUNTS.iter() {
                    div {
                        p { class: "font-medium text-blue-700", {account.role.label()} " Account:" }
                        p { class: "text-blue-600", "Email: {account.email}" }
                        p { class: "text-blue-600", "Password: {account.password}" }
                    }
                }
                p {
                    class: "text-blue-600",
                    "Donors sign in as members with the password from their receipt (it starts with \"{DONOR_PASSWORD_PREFIX}\")."
                }
            }
        }
    }
}
