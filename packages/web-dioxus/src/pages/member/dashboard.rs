//! Member dashboard

use dioxus::prelude::*;
use hopehands_core::forms::{ApplicationQueue, ApplicationStatus};

use crate::auth::use_auth;
use crate::pages::membership::StatusBadge;
use crate::routes::Route;

#[component]
pub fn MemberDashboard() -> Element {
    let auth = use_auth();
    let queue = use_context::<ApplicationQueue>();

    let session = auth.session.read().clone();
    let email = session.email().unwrap_or_default().to_string();
    let application = queue.latest_for_email(&email);
    let status = application
        .as_ref()
        .map(|record| record.status)
        .unwrap_or_default();
    let member_number = application.and_then(|record| record.member_number);
    let since = session
        .issued_at
        .map(|at| at.format("%B %-d, %Y %H:%M").to_string());

    rsx! {
        div {
            class: "space-y-8",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Member Dashboard" }
                p { class: "text-gray-500", "Signed in as {email}" }
                if let Some(since) = since {
                    p { class: "text-xs text-gray-400", "Session started {since}" }
                }
            }

            div {
                class: "grid md:grid-cols-2 gap-6",

                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-3",
                    h2 { class: "text-lg font-semibold", "Membership" }
                    StatusBadge { status: status }
                    if let Some(number) = member_number {
                        p { class: "text-sm", "Member ID: {number}" }
                    }
                    if status == ApplicationStatus::None {
                        Link {
                            to: Route::Membership {},
                            class: "inline-block text-sm text-emerald-700 hover:underline",
                            "Apply for membership \u{2192}"
                        }
                    }
                }

                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-3",
                    h2 { class: "text-lg font-semibold", "Get Involved" }
                    ul {
                        class: "space-y-2 text-sm",
                        li { Link { to: Route::Projects {}, class: "text-emerald-700 hover:underline", "Browse current projects" } }
                        li { Link { to: Route::Donate {}, class: "text-emerald-700 hover:underline", "Make a donation" } }
                        li { Link { to: Route::Contact {}, class: "text-emerald-700 hover:underline", "Contact the team" } }
                    }
                }
            }
        }
    }
}
