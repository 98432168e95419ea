//! Root application component

use dioxus::prelude::*;
use hopehands_core::forms::ApplicationQueue;
use hopehands_core::SiteConfig;

use crate::auth::AuthProvider;
use crate::routes::Route;
use crate::state::MembershipState;

/// Root application component
#[component]
pub fn App() -> Element {
    use_context_provider(load_config);
    use_context_provider(ApplicationQueue::new);
    use_context_provider(MembershipState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }
    }
}

fn load_config() -> SiteConfig {
    match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid site configuration, using defaults");
            SiteConfig::default()
        }
    }
}
