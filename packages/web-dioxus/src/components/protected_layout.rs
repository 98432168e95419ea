//! Dashboard layout with route guarding

use dioxus::prelude::*;
use hopehands_core::guard;

use crate::auth::use_auth;
use crate::routes::Route;
use super::LoadingSpinner;

/// Wraps the member and admin dashboards. Visitors without a suitable
/// session are sent to the page the guard picks.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let loading = *auth.loading.read();
    let session = auth.session.read().clone();

    // No decision until the stored session has been read
    let redirect = match route.page() {
        Some(page) if !loading => guard::check(page, &session).redirect_target(),
        _ => None,
    };

    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        if let Some(page) = redirect {
            navigator.replace(Route::from(page));
        }
    }));

    if loading || redirect.is_some() {
        let label: &'static str = if loading { "Checking your session..." } else { "Redirecting..." };
        return rsx! {
            div {
                class: "min-h-[60vh] flex items-center justify-center",
                LoadingSpinner {
                    label,
                }
            }
        };
    }

    rsx! {
        div {
            class: "container mx-auto px-4 py-10",
            Outlet::<Route> {}
        }
    }
}
