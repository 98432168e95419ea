//! Contact page

use dioxus::prelude::*;
use hopehands_core::forms::{ContactMessage, FormSubmission};
use hopehands_core::SiteConfig;

use crate::components::LoadingDots;
use crate::delay::simulate_latency;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500";

/// Contact page with a simulated message form
#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let latency = config.contact_latency;
    let reset_delay = config.contact_reset_delay;

    let mut message = use_signal(ContactMessage::default);
    let mut submission = use_signal(FormSubmission::new);

    let handle_submit = move |_| {
        let draft = message.read().clone();
        if submission.write().begin(draft.validate()).is_err() {
            return;
        }

        spawn(async move {
            simulate_latency(latency).await;
            submission.write().complete();
            tracing::info!("Contact message sent");

            // Confirmation stays up, then the form comes back blank
            simulate_latency(reset_delay).await;
            submission.write().reset();
            message.set(ContactMessage::default());
        });
    };

    let error = submission.read().error().map(|e| e.to_string());
    let is_submitting = submission.read().is_submitting();
    let is_submitted = submission.read().is_submitted();

    rsx! {
        div {
            // Hero Section
            section {
                class: "py-20 bg-gradient-to-br from-emerald-50 via-white to-amber-50",
                div {
                    class: "container mx-auto px-4 max-w-4xl text-center space-y-6",
                    h1 {
                        class: "text-4xl md:text-6xl font-bold leading-tight",
                        "Let's Work Together to "
                        span { class: "text-emerald-700", "Change Lives" }
                    }
                    p {
                        class: "text-xl text-gray-500 max-w-2xl mx-auto",
                        "Have questions about our projects? Want to partner with us? We'd love to hear from you."
                    }
                }
            }

            section {
                class: "py-16",
                div {
                    class: "container mx-auto px-4 grid lg:grid-cols-2 gap-12",

                    // Contact Form
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h2 { class: "text-2xl font-bold mb-4", "Send Us a Message" }

                        if is_submitted {
                            div {
                                class: "text-center py-8 space-y-4",
                                h3 { class: "text-xl font-semibold", "Message Sent Successfully!" }
                                p {
                                    class: "text-gray-500",
                                    "Thank you for contacting us. We'll respond within 24 hours."
                                }
                            }
                        } else {
                            form {
                                class: "space-y-4",
                                onsubmit: handle_submit,

                                if let Some(err) = error {
                                    div {
                                        class: "p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                                        "{err}"
                                    }
                                }

                                div {
                                    class: "grid md:grid-cols-2 gap-4",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Full Name *" }
                                        input {
                                            value: message.read().name.clone(),
                                            oninput: move |e| message.write().name = e.value(),
                                            placeholder: "Enter your full name",
                                            class: INPUT_CLASS,
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Email Address *" }
                                        input {
                                            r#type: "email",
                                            value: message.read().email.clone(),
                                            oninput: move |e| message.write().email = e.value(),
                                            placeholder: "Enter your email",
                                            class: INPUT_CLASS,
                                        }
                                    }
                                }

                                div {
                                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Subject" }
                                    input {
                                        value: message.read().subject.clone(),
                                        oninput: move |e| message.write().subject = e.value(),
                                        placeholder: "What's this about?",
                                        class: INPUT_CLASS,
                                    }
                                }

                                div {
                                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Message *" }
                                    textarea {
                                        value: message.read().message.clone(),
                                        oninput: move |e| message.write().message = e.value(),
                                        placeholder: "Tell us how we can help you...",
                                        rows: "6",
                                        class: INPUT_CLASS,
                                    }
                                }

                                button {
                                    r#type: "submit",
                                    class: "w-full bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700 disabled:opacity-50",
                                    disabled: is_submitting,
                                    if is_submitting {
                                        "Sending"
                                        LoadingDots {}
                                    } else {
                                        "Send Message"
                                    }
                                }
                            }
                        }
                    }

                    // Contact Information
                    div {
                        class: "space-y-6",
                        h2 { class: "text-2xl font-bold", "Contact Information" }
                        InfoCard { title: "Address", detail: config.contact_address.clone() }
                        InfoCard { title: "Phone", detail: config.contact_phone.clone() }
                        InfoCard { title: "Email", detail: config.contact_email.clone() }
                        InfoCard {
                            title: "Office Hours",
                            detail: "Monday - Friday: 9:00 AM - 6:00 PM".to_string()
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoCard(title: &'static str, detail: String) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-gray-200 p-6",
            h3 { class: "font-semibold", "{title}" }
            p { class: "text-gray-500 text-sm", "{detail}" }
        }
    }
}
