//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...")] label: &'static str) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-emerald-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-emerald-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-emerald-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{label}" }
        }
    }
}

/// Inline indicator for buttons waiting on a simulated request
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "inline-flex space-x-1 mr-2 align-middle",
            span { class: "w-1.5 h-1.5 bg-white rounded-full animate-bounce" }
            span { class: "w-1.5 h-1.5 bg-white rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            span { class: "w-1.5 h-1.5 bg-white rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
