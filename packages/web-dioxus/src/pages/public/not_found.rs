//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div {
            class: "min-h-[60vh] flex flex-col items-center justify-center space-y-4 px-4",
            h1 { class: "text-6xl font-bold text-emerald-700", "404" }
            p { class: "text-xl text-gray-500", "Oops! Page not found" }
            p { class: "text-sm text-gray-400", "{path}" }
            Link {
                to: Route::Home {},
                class: "text-emerald-700 hover:underline",
                "Return to Home"
            }
        }
    }
}
