//! Injectable session service
//!
//! Bundles the [`SessionStore`], the [`AuthNotifier`] and an
//! [`Authenticator`]. Components receive it explicitly instead of reaching
//! for ambient storage.

use std::rc::Rc;

use chrono::Utc;
use tracing::info;

use super::notifier::{AuthNotifier, AuthSignal, Subscription};
use super::store::{issue_token, Session, SessionStore};
use crate::auth::{Authenticator, Credentials, MockAuthenticator};
use crate::error::{AuthError, SignupError, StorageError};
use crate::forms::SignupForm;
use crate::navigation::Page;

#[derive(Clone)]
pub struct AuthService {
    store: SessionStore,
    notifier: AuthNotifier,
    authenticator: Rc<dyn Authenticator>,
    session_ttl: Option<chrono::Duration>,
}

impl AuthService {
    pub fn new(store: SessionStore, authenticator: Rc<dyn Authenticator>) -> Self {
        Self {
            store,
            notifier: AuthNotifier::new(),
            authenticator,
            session_ttl: None,
        }
    }

    /// Service over `store` with the demo authenticator
    pub fn with_mock_authenticator(store: SessionStore) -> Self {
        Self::new(store, Rc::new(MockAuthenticator::new()))
    }

    /// Expire sessions older than `ttl`
    pub fn with_session_ttl(mut self, ttl: Option<chrono::Duration>) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn notifier(&self) -> &AuthNotifier {
        &self.notifier
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Whether sessions are only held in memory
    pub fn is_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    /// Current session, with the configured expiry applied.
    ///
    /// An expired session is purged from storage but no signal is fired;
    /// every reader going through the service sees it as signed out.
    pub fn current(&self) -> Session {
        let session = self.store.read();

        if let Some(ttl) = self.session_ttl {
            if session.is_expired(Utc::now(), ttl) {
                info!("Session expired");
                let _ = self.store.clear();
                return Session::anonymous();
            }
        }

        session
    }

    /// Verify `credentials`, open a session and broadcast the change.
    ///
    /// Returns the page the user should land on.
    pub async fn login(&self, credentials: Credentials) -> Result<Page, AuthError> {
        let grant = self.authenticator.validate(&credentials).await?;

        let token = issue_token(grant.role, Utc::now());
        if let Err(e) = self.store.write(&token, grant.role, &grant.email) {
            // The rollback cleared any previous session
            self.notifier.fire();
            return Err(e.into());
        }
        self.notifier.fire();

        info!(role = %grant.role, "Signed in");
        Ok(grant.role.landing_page())
    }

    /// Close the session and broadcast the change
    pub fn logout(&self) -> Result<(), StorageError> {
        let result = self.store.clear();
        // Listeners re-read the store even if a field could not be removed.
        self.notifier.fire();
        info!("Signed out");
        result
    }

    /// Validate a signup. Accounts are not created anywhere and the session
    /// is left untouched.
    pub fn signup(&self, form: &SignupForm) -> Result<(), SignupError> {
        form.validate()?;
        info!("Signup accepted");
        Ok(())
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthSignal) + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }

    /// Entry point for the browser `storage` event
    pub fn relay_storage_event(&self, key: Option<&str>) -> usize {
        self.notifier.relay_storage_change(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use async_trait::async_trait;
    use std::cell::Cell;

    struct Unreachable;

    #[async_trait(?Send)]
    impl Authenticator for Unreachable {
        async fn validate(&self, _credentials: &Credentials) -> Result<crate::AuthGrant, AuthError> {
            Err(AuthError::SubmissionFailed)
        }
    }

    /// Storage whose email writes can be switched off
    #[derive(Default)]
    struct FullEmailStorage {
        inner: MemoryStorage,
        full: Cell<bool>,
    }

    impl KeyValueStorage for FullEmailStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.full.get() && key == "userEmail" {
                return Err(StorageError::QuotaExceeded(key.to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn counting(service: &AuthService) -> (Rc<Cell<usize>>, Subscription) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = service.subscribe(move |_| h.set(h.get() + 1));
        (hits, sub)
    }

    #[tokio::test]
    async fn test_login_writes_session_and_fires() {
        let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
        let (hits, _sub) = counting(&service);

        let page = service
            .login(Credentials::new("member@hopehands.org", "member123", Role::Member))
            .await
            .unwrap();

        assert_eq!(page, Page::MemberDashboard);
        assert_eq!(hits.get(), 1);

        let session = service.current();
        assert!(session.token_present);
        assert_eq!(session.role(), Some(Role::Member));
        assert_eq!(session.email(), Some("member@hopehands.org"));
        assert!(session.issued_at.is_some());
    }

    #[tokio::test]
    async fn test_admin_lands_on_admin_dashboard() {
        let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
        let page = service
            .login(Credentials::new("admin@hopehands.org", "admin123", Role::Admin))
            .await
            .unwrap();
        assert_eq!(page, Page::AdminDashboard);
        assert!(service.current().is_admin());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_store_untouched() {
        let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
        let (hits, _sub) = counting(&service);

        let result = service
            .login(Credentials::new("x@y.com", "wrong1", Role::Member))
            .await;

        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert_eq!(hits.get(), 0);
        assert!(!service.current().token_present);
    }

    #[tokio::test]
    async fn test_failed_relogin_fires_for_cleared_session() {
        let backend = Rc::new(FullEmailStorage::default());
        let service = AuthService::with_mock_authenticator(SessionStore::new(backend.clone()));
        service
            .login(Credentials::new("member@hopehands.org", "member123", Role::Member))
            .await
            .unwrap();

        let signed_in = Rc::new(Cell::new(true));
        let view = signed_in.clone();
        let reader = service.clone();
        let _view_sub = service.subscribe(move |_| view.set(reader.current().token_present));
        let (hits, _sub) = counting(&service);

        backend.full.set(true);
        let result = service
            .login(Credentials::new("admin@hopehands.org", "admin123", Role::Admin))
            .await;

        assert_eq!(
            result,
            Err(AuthError::Storage(StorageError::QuotaExceeded("userEmail".into())))
        );
        assert_eq!(hits.get(), 1);
        assert!(!signed_in.get());
        assert!(!service.current().token_present);
    }

    #[tokio::test]
    async fn test_authenticator_failure_propagates() {
        let service = AuthService::new(SessionStore::in_memory(), Rc::new(Unreachable));
        let result = service
            .login(Credentials::new("member@hopehands.org", "member123", Role::Member))
            .await;
        assert_eq!(result, Err(AuthError::SubmissionFailed));
    }

    #[tokio::test]
    async fn test_logout_clears_and_fires() {
        let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
        service
            .login(Credentials::new("x@y.com", "donor-abc", Role::Member))
            .await
            .unwrap();

        let (hits, _sub) = counting(&service);
        service.logout().unwrap();

        assert_eq!(hits.get(), 1);
        assert!(!service.current().token_present);
    }

    #[test]
    fn test_signup_never_writes_session() {
        let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
        let (hits, _sub) = counting(&service);

        let short = SignupForm {
            full_name: "Ada".into(),
            email: "ada@x.org".into(),
            password: "short".into(),
            confirm_password: "short".into(),
        };
        assert_eq!(
            service.signup(&short),
            Err(SignupError::PasswordTooShort { min: 8 })
        );

        let mismatch = SignupForm {
            confirm_password: "different1".into(),
            password: "longenough".into(),
            ..short.clone()
        };
        assert_eq!(service.signup(&mismatch), Err(SignupError::PasswordMismatch));

        let ok = SignupForm {
            password: "longenough".into(),
            confirm_password: "longenough".into(),
            ..short
        };
        assert!(service.signup(&ok).is_ok());

        assert_eq!(hits.get(), 0);
        assert!(!service.current().token_present);
    }

    #[test]
    fn test_expired_session_reads_signed_out() {
        let store = SessionStore::in_memory();
        store
            .write("jwt.token.member.0", Role::Member, "m@x.org")
            .unwrap();

        let service = AuthService::with_mock_authenticator(store.clone())
            .with_session_ttl(Some(chrono::Duration::hours(24)));

        assert!(!service.current().token_present);
        // purged from storage too
        assert!(!store.read().token_present);
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let store = SessionStore::in_memory();
        store
            .write("jwt.token.member.0", Role::Member, "m@x.org")
            .unwrap();

        let service = AuthService::with_mock_authenticator(store);
        assert!(service.current().token_present);
    }

    #[test]
    fn test_relay_reaches_subscribers() {
        let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
        let (hits, _sub) = counting(&service);

        service.relay_storage_event(Some("userRole"));
        service.relay_storage_event(Some("unrelated"));
        assert_eq!(hits.get(), 1);
    }
}
