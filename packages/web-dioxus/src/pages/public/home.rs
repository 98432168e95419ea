//! Home page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "50K+", label: "Lives Impacted" },
    Stat { value: "120+", label: "Projects Completed" },
    Stat { value: "25", label: "Countries Reached" },
    Stat { value: "2.5K+", label: "Active Members" },
];

/// Home page
#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    // Signed-in visitors get a shortcut to their dashboard
    let dashboard = if !auth.is_authenticated() {
        None
    } else if auth.is_admin() {
        Some(Route::AdminDashboard {})
    } else {
        Some(Route::MemberDashboard {})
    };

    rsx! {
        div {
            // Hero Section
            section {
                class: "py-20 md:py-32 bg-gradient-to-br from-emerald-50 via-white to-amber-50",
                div {
                    class: "container mx-auto px-4 max-w-4xl text-center space-y-6",
                    span {
                        class: "inline-block px-3 py-1 rounded-full bg-emerald-100 text-emerald-800 text-xs font-medium",
                        "Making a Difference Since 2010"
                    }
                    h1 {
                        class: "text-4xl md:text-6xl font-bold leading-tight",
                        "Together We Build "
                        span { class: "text-emerald-700", "Hope" }
                    }
                    p {
                        class: "text-xl text-gray-500 leading-relaxed max-w-2xl mx-auto",
                        "HopeHands brings clean water, education and healthcare to communities that need them most."
                    }
                    div {
                        class: "flex flex-col sm:flex-row gap-4 justify-center pt-4",
                        match dashboard {
                            Some(route) => rsx! {
                                Link {
                                    to: route,
                                    class: "px-6 py-3 rounded-md text-white bg-emerald-600 hover:bg-emerald-700 font-medium",
                                    "Go to Dashboard"
                                }
                            },
                            None => rsx! {
                                Link {
                                    to: Route::Membership {},
                                    class: "px-6 py-3 rounded-md text-white bg-emerald-600 hover:bg-emerald-700 font-medium",
                                    "Join Our Mission"
                                }
                            },
                        }
                        Link {
                            to: Route::Projects {},
                            class: "px-6 py-3 rounded-md border border-emerald-600 text-emerald-700 hover:bg-emerald-50 font-medium",
                            "View Our Projects"
                        }
                    }
                }
            }

            // Impact Stats
            section {
                class: "py-16",
                div {
                    class: "container mx-auto px-4 grid grid-cols-2 md:grid-cols-4 gap-6",
                    for stat in STATS.iter() {
                        div {
                            class: "text-center space-y-1",
                            p { class: "text-3xl font-bold text-emerald-700", "{stat.value}" }
                            p { class: "text-sm text-gray-500", "{stat.label}" }
                        }
                    }
                }
            }

            // Call to Action
            section {
                class: "py-20 bg-emerald-700 text-white",
                div {
                    class: "container mx-auto px-4 max-w-3xl text-center space-y-6",
                    h2 { class: "text-3xl md:text-4xl font-bold", "Every Gift Changes a Life" }
                    p {
                        class: "text-lg text-emerald-50",
                        "Support a project today or become a member and help shape what we do next."
                    }
                    Link {
                        to: Route::Donate {},
                        class: "inline-block px-6 py-3 rounded-md bg-white text-emerald-700 font-medium hover:bg-emerald-50",
                        "Donate Now"
                    }
                }
            }
        }
    }
}
