//! Authentication context provider

use std::rc::Rc;

use dioxus::prelude::*;
use hopehands_core::{AuthService, Session, SiteConfig, StorageError};

use super::browser::{open_session_store, watch_other_tabs};

/// Authentication context that provides session state to the entire app
#[derive(Clone)]
pub struct AuthContext {
    /// Session service shared by every component
    pub service: AuthService,
    /// Last session read from the store
    pub session: Signal<Session>,
    /// True until the browser storage has been read
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.session.read().token_present
    }

    /// Check if the user signed in as an admin
    pub fn is_admin(&self) -> bool {
        self.session.read().is_admin()
    }

    /// Re-read the session from the store
    pub fn refresh(&self) {
        let mut session = self.session;
        session.set(self.service.current());
    }

    /// Clear the session. Subscribers, including this context, refresh
    /// through the notifier.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.service.logout()
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<SiteConfig>();

    let service = use_hook(|| {
        AuthService::with_mock_authenticator(open_session_store())
            .with_session_ttl(config.session_ttl)
    });

    // Server render and first client render both start signed out
    let session = use_signal(Session::anonymous);
    let mut loading = use_signal(|| true);

    let auth = use_context_provider(|| AuthContext {
        service: service.clone(),
        session,
        loading,
    });

    // Same-tab changes. Dropping the hook state unsubscribes.
    use_hook(|| {
        let listener = auth.clone();
        Rc::new(auth.service.subscribe(move |_| listener.refresh()))
    });

    // Changes made in other tabs
    use_hook(|| Rc::new(watch_other_tabs(&service)));

    // Load initial auth state once mounted in the browser
    use_effect(move || {
        auth.refresh();
        loading.set(false);
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
