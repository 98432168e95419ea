//! HopeHands - Dioxus Fullstack Web Application
//!
//! Marketing pages, membership applications and member/admin dashboards.
//! Sign-in is simulated against demo credentials and the session lives in
//! the browser's local storage (see `hopehands-core`).
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod delay;
mod pages;
mod routes;
mod state;

fn main() {
    // Native builds log through tracing-subscriber; the browser uses the
    // Dioxus logger installed by launch.
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
