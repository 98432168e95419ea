//! Admin profile page

use dioxus::prelude::*;

use crate::auth::use_auth;

#[component]
pub fn AdminProfile() -> Element {
    let auth = use_auth();
    let session = auth.session.read().clone();

    let email = session.email().unwrap_or("unknown").to_string();
    let role = session.role().map(|r| r.label()).unwrap_or("Unknown");
    let since = session
        .issued_at
        .map(|at| at.format("%B %-d, %Y %H:%M UTC").to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let storage = if auth.service.is_degraded() {
        "This tab only"
    } else {
        "Browser storage"
    };

    rsx! {
        div {
            class: "max-w-2xl space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Profile" }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                dl {
                    class: "grid grid-cols-3 gap-y-3 text-sm",
                    dt { class: "text-gray-500", "Email" }
                    dd { class: "col-span-2 text-gray-900", "{email}" }
                    dt { class: "text-gray-500", "Role" }
                    dd { class: "col-span-2 text-gray-900", "{role}" }
                    dt { class: "text-gray-500", "Signed in" }
                    dd { class: "col-span-2 text-gray-900", "{since}" }
                    dt { class: "text-gray-500", "Session kept in" }
                    dd { class: "col-span-2 text-gray-900", "{storage}" }
                }
            }
        }
    }
}
