//! About page

use dioxus::prelude::*;

use crate::routes::Route;

struct Value {
    title: &'static str,
    description: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Compassion",
        description: "We meet every community with empathy and respect.",
    },
    Value {
        title: "Transparency",
        description: "Every donation is tracked and reported back to our supporters.",
    },
    Value {
        title: "Sustainability",
        description: "We build projects that communities can run on their own.",
    },
    Value {
        title: "Partnership",
        description: "Local leaders shape every project from the first day.",
    },
];

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            section {
                class: "py-20 bg-gradient-to-br from-emerald-50 via-white to-amber-50",
                div {
                    class: "container mx-auto px-4 max-w-4xl text-center space-y-6",
                    h1 { class: "text-4xl md:text-5xl font-bold", "About HopeHands" }
                    p {
                        class: "text-xl text-gray-500 leading-relaxed",
                        "For over a decade we have worked alongside communities worldwide to create lasting, positive change."
                    }
                }
            }

            section {
                class: "py-16",
                div {
                    class: "container mx-auto px-4 grid md:grid-cols-2 gap-6 max-w-5xl",
                    for value in VALUES.iter() {
                        div {
                            class: "rounded-lg border border-gray-200 p-6 space-y-2",
                            h3 { class: "text-lg font-semibold text-emerald-700", "{value.title}" }
                            p { class: "text-gray-500", "{value.description}" }
                        }
                    }
                }
            }

            section {
                class: "py-16 bg-gray-50 text-center",
                div {
                    class: "container mx-auto px-4 space-y-4",
                    h2 { class: "text-2xl font-bold", "Want to get involved?" }
                    Link {
                        to: Route::Membership {},
                        class: "inline-block px-6 py-3 rounded-md text-white bg-emerald-600 hover:bg-emerald-700 font-medium",
                        "Become a Member"
                    }
                }
            }
        }
    }
}
