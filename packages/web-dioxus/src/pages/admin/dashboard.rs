//! Admin dashboard page

use dioxus::prelude::*;
use hopehands_core::forms::{ApplicationQueue, ApplicationRecord};
use uuid::Uuid;

use crate::routes::Route;

/// Admin dashboard with application stats and the review queue
#[component]
pub fn AdminDashboard() -> Element {
    let queue = use_context::<ApplicationQueue>();
    // The queue is not reactive; bumping this re-renders after a change
    let mut revision = use_signal(|| 0u32);
    let mut export = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let _ = revision();
    let pending = queue.pending();
    let total = queue.len();
    let pending_count = pending.len();
    let approved = total - pending_count;

    let approve_queue = queue.clone();
    let handle_approve = move |reference: Uuid| match approve_queue.approve(reference) {
        Ok(record) => {
            tracing::info!(%reference, member = ?record.member_number, "Application approved");
            error.set(None);
            revision += 1;
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    let export_queue = queue.clone();
    let handle_export = move |_| match export_queue.export_json() {
        Ok(json) => export.set(Some(json)),
        Err(e) => error.set(Some(format!("Export failed: {e}"))),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Admin Dashboard" }

            // Stats Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",
                StatCard { title: "Applications", value: total, icon: "\u{1F4CB}", color: "blue" }
                StatCard { title: "Pending Review", value: pending_count, icon: "\u{23F3}", color: "amber" }
                StatCard { title: "Approved Members", value: approved, icon: "\u{2705}", color: "green" }
            }

            if let Some(err) = error() {
                div {
                    class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                    "{err}"
                }
            }

            // Review queue
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Pending Applications" }
                if pending.is_empty() {
                    p { class: "text-sm text-gray-500", "No applications are waiting for review." }
                } else {
                    ul {
                        class: "divide-y divide-gray-100",
                        for record in pending.iter() {
                            PendingRow {
                                key: "{record.reference}",
                                record: record.clone(),
                                on_approve: handle_approve.clone(),
                            }
                        }
                    }
                }
            }

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                h2 { class: "text-lg font-semibold text-gray-900", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink { to: Route::AdminProfile {}, label: "Profile", icon: "\u{1F6E1}" }
                    QuickActionLink { to: Route::Membership {}, label: "Membership Page", icon: "\u{1F465}" }
                    button {
                        class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                        onclick: handle_export,
                        span { "\u{1F4E5}" }
                        "Export Applications"
                    }
                }
                if let Some(json) = export() {
                    pre {
                        class: "text-xs bg-gray-50 border border-gray-200 rounded p-4 overflow-x-auto max-h-96",
                        "{json}"
                    }
                }
            }
        }
    }
}

#[component]
fn PendingRow(record: ApplicationRecord, on_approve: EventHandler<Uuid>) -> Element {
    let reference = record.reference;
    let submitted = record.submitted_at.format("%Y-%m-%d").to_string();
    let application = &record.application;

    rsx! {
        li {
            class: "py-3 flex items-center justify-between",
            div {
                p { class: "font-medium text-gray-900", "{application.full_name}" }
                p { class: "text-sm text-gray-500", "{application.email} \u{00B7} {application.city}, {application.country} \u{00B7} {submitted}" }
            }
            button {
                class: "px-3 py-1.5 rounded-md text-sm font-medium text-white bg-emerald-600 hover:bg-emerald-700",
                onclick: move |_| on_approve.call(reference),
                "Approve"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: usize,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "blue" => "bg-blue-50",
        "amber" => "bg-amber-50",
        "green" => "bg-green-50",
        _ => "bg-gray-50",
    };

    let text_class = match props.color {
        "blue" => "text-blue-700",
        "amber" => "text-amber-700",
        "green" => "text-green-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}
