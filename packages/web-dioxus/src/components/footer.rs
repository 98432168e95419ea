//! Site footer

use dioxus::prelude::*;
use hopehands_core::SiteConfig;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let mut newsletter_email = use_signal(String::new);
    let mut subscribed = use_signal(|| false);

    rsx! {
        footer {
            class: "border-t bg-emerald-50/40",
            div {
                class: "container mx-auto px-4 py-10",
                div {
                    class: "grid grid-cols-1 md:grid-cols-4 gap-8",

                    div {
                        class: "space-y-3",
                        p { class: "font-bold text-emerald-700", "{config.organization_name}" }
                        p {
                            class: "text-sm text-gray-500 leading-relaxed",
                            "Empowering communities through compassionate action and sustainable change."
                        }
                    }

                    div {
                        class: "space-y-3",
                        h4 { class: "text-sm font-semibold text-emerald-700", "Quick Links" }
                        ul {
                            class: "space-y-2 text-sm text-gray-500",
                            li { Link { to: Route::About {}, "About Us" } }
                            li { Link { to: Route::Projects {}, "Our Projects" } }
                            li { Link { to: Route::Membership {}, "Become a Member" } }
                        }
                    }

                    div {
                        class: "space-y-3",
                        h4 { class: "text-sm font-semibold text-emerald-700", "Contact Info" }
                        ul {
                            class: "space-y-2 text-sm text-gray-500",
                            li { "{config.contact_email}" }
                            li { "{config.contact_phone}" }
                            li { "{config.contact_address}" }
                        }
                    }

                    div {
                        class: "space-y-3",
                        h4 { class: "text-sm font-semibold text-emerald-700", "Stay Updated" }
                        if subscribed() {
                            p { class: "text-sm text-emerald-700", "Thanks for subscribing!" }
                        } else {
                            form {
                                class: "flex space-x-2",
                                onsubmit: move |_| {
                                    if newsletter_email().contains('@') {
                                        subscribed.set(true);
                                        newsletter_email.set(String::new());
                                    }
                                },
                                input {
                                    r#type: "email",
                                    value: "{newsletter_email}",
                                    oninput: move |e| newsletter_email.set(e.value()),
                                    placeholder: "Enter your email",
                                    class: "flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm"
                                }
                                button {
                                    r#type: "submit",
                                    class: "px-3 py-2 rounded-md text-sm text-white bg-emerald-600 hover:bg-emerald-700",
                                    "Subscribe"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "mt-8 border-t border-emerald-100 pt-6 text-center text-sm text-gray-500",
                    "\u{00A9} 2024 {config.organization_name} NGO. All rights reserved."
                }
            }
        }
    }
}
