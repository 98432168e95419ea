//! Donation page
//!
//! Pledges are acknowledged locally; no payment is taken.

use dioxus::prelude::*;
use hopehands_core::forms::FormSubmission;
use hopehands_core::{FormError, SiteConfig};

use crate::components::LoadingDots;
use crate::delay::simulate_latency;

const AMOUNTS: [u32; 4] = [25, 50, 100, 250];

#[component]
pub fn Donate() -> Element {
    let config = use_context::<SiteConfig>();
    let latency = config.contact_latency;

    let mut amount = use_signal(|| AMOUNTS[1]);
    let mut email = use_signal(String::new);
    let mut submission = use_signal(FormSubmission::new);

    let handle_submit = move |_| {
        let validation = if email().trim().is_empty() {
            Err(FormError::MissingFields(vec!["Email Address"]))
        } else {
            Ok(())
        };
        if submission.write().begin(validation).is_err() {
            return;
        }

        spawn(async move {
            simulate_latency(latency).await;
            tracing::info!(amount = amount(), "Donation pledged");
            submission.write().complete();
        });
    };

    let error = submission.read().error().map(|e| e.to_string());
    let is_submitting = submission.read().is_submitting();
    let is_submitted = submission.read().is_submitted();

    rsx! {
        section {
            class: "py-20 bg-gradient-to-br from-emerald-50 via-white to-amber-50",
            div {
                class: "container mx-auto px-4 max-w-xl",
                div {
                    class: "bg-white rounded-lg shadow-md p-8 space-y-6",
                    h1 { class: "text-3xl font-bold text-center", "Make a Donation" }

                    if is_submitted {
                        div {
                            class: "text-center py-8 space-y-4",
                            h3 { class: "text-xl font-semibold", "Thank you for your gift of ${amount}!" }
                            p {
                                class: "text-gray-500",
                                "A receipt and your donor account details will follow by email."
                            }
                            button {
                                class: "text-emerald-700 hover:underline text-sm",
                                onclick: move |_| {
                                    submission.write().reset();
                                    email.set(String::new());
                                },
                                "Make another donation"
                            }
                        }
                    } else {
                        form {
                            class: "space-y-6",
                            onsubmit: handle_submit,

                            div {
                                class: "grid grid-cols-4 gap-2",
                                for value in AMOUNTS {
                                    button {
                                        r#type: "button",
                                        class: if amount() == value {
                                            "py-2 rounded-md border border-emerald-600 bg-emerald-600 text-white"
                                        } else {
                                            "py-2 rounded-md border border-gray-300 hover:border-emerald-600"
                                        },
                                        onclick: move |_| amount.set(value),
                                        "${value}"
                                    }
                                }
                            }

                            if let Some(err) = error {
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
                                    oninput: move |e| email.set(e.value()),
                                    placeholder: "Enter your email",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                                    disabled: is_submitting
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "w-full bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700 disabled:opacity-50",
                                disabled: is_submitting,
                                if is_submitting {
                                    "Processing"
                                    LoadingDots {}
                                } else {
                                    "Donate ${amount}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
