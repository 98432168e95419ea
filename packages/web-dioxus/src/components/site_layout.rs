//! Site-wide layout: header navigation, auth controls and footer

use dioxus::prelude::*;
use hopehands_core::navigation::{self, is_active};

use crate::auth::use_auth;
use crate::routes::Route;
use super::{AuthActions, Footer, NavLink};

/// Layout shared by every page
#[component]
pub fn SiteLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let mut menu_open = use_signal(|| false);

    // Re-read the stored session whenever the location changes
    let refresher = auth.clone();
    use_effect(use_reactive((&route,), move |(_route,)| {
        refresher.refresh();
    }));

    let session = auth.session.read().clone();
    let loading = *auth.loading.read();
    let entries = navigation::resolve(&session);
    let actions = navigation::resolve_actions(&session, loading);
    let current_path = route.to_string();
    let degraded = !loading && auth.service.is_degraded();

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-white",

            header {
                class: "sticky top-0 z-50 w-full border-b bg-white/95 shadow-sm",
                div {
                    class: "container mx-auto flex h-16 items-center justify-between px-4",

                    // Logo / Brand
                    Link {
                        to: Route::Home {},
                        class: "flex items-center space-x-2 text-xl font-bold text-emerald-700",
                        span { "\u{1F91D}" }
                        span { "HopeHands" }
                    }

                    // Desktop navigation
                    nav {
                        class: "hidden md:flex items-center space-x-6",
                        for entry in entries.iter().copied() {
                            NavLink {
                                key: "{entry.label}",
                                entry: entry,
                                active: is_active(&entry, &current_path),
                            }
                        }
                    }

                    div {
                        class: "hidden md:flex",
                        AuthActions { actions: actions.clone() }
                    }

                    // Mobile menu button
                    button {
                        class: "md:hidden text-2xl",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }

                // Mobile navigation
                if menu_open() {
                    div {
                        class: "md:hidden border-t bg-white",
                        div {
                            class: "container mx-auto space-y-1 py-4 px-4",
                            for entry in entries.iter().copied() {
                                div {
                                    key: "{entry.label}",
                                    onclick: move |_| menu_open.set(false),
                                    NavLink {
                                        entry: entry,
                                        active: is_active(&entry, &current_path),
                                        mobile: true,
                                    }
                                }
                            }
                            AuthActions {
                                actions: actions.clone(),
                                mobile: true,
                                on_action: move |_| menu_open.set(false),
                            }
                        }
                    }
                }
            }

            if degraded {
                div {
                    class: "bg-amber-50 border-b border-amber-200 text-amber-800 text-sm text-center px-4 py-2",
                    "Your browser is blocking local storage. You will be signed out when this page is reloaded."
                }
            }

            // Main content
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}
