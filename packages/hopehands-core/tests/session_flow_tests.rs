//! End-to-end session flows: login, navigation refresh, cross-tab relay
//! and logout, driven through the public API the web frontend uses.

use std::cell::RefCell;
use std::rc::Rc;

use hopehands_core::guard::{self, GuardDecision};
use hopehands_core::navigation::{self, AuthAction};
use hopehands_core::{
    AuthError, AuthService, AuthSignal, Credentials, KeyValueStorage, MemoryStorage, Page, Role,
    Session, SessionStore,
};

/// Mimics a mounted layout: re-reads the session on every signal and keeps
/// the resolved navigation.
struct MountedNav {
    pages: Rc<RefCell<Vec<Page>>>,
    _subscription: hopehands_core::Subscription,
}

impl MountedNav {
    fn mount(service: &AuthService) -> Self {
        let pages = Rc::new(RefCell::new(pages_for(&service.current())));

        let reader = service.clone();
        let target = pages.clone();
        let subscription = service.subscribe(move |_| {
            *target.borrow_mut() = pages_for(&reader.current());
        });

        Self {
            pages,
            _subscription: subscription,
        }
    }

    fn pages(&self) -> Vec<Page> {
        self.pages.borrow().clone()
    }
}

fn pages_for(session: &Session) -> Vec<Page> {
    navigation::resolve(session).iter().map(|e| e.page).collect()
}

#[tokio::test]
async fn test_login_refreshes_every_mounted_nav() {
    let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
    let header = MountedNav::mount(&service);
    let mobile = MountedNav::mount(&service);

    assert!(header.pages().contains(&Page::Membership));

    let landing = service
        .login(Credentials::new("admin@hopehands.org", "admin123", Role::Admin))
        .await
        .unwrap();
    assert_eq!(landing, Page::AdminDashboard);

    for nav in [&header, &mobile] {
        let pages = nav.pages();
        assert!(pages.contains(&Page::AdminDashboard));
        assert!(pages.contains(&Page::AdminProfile));
        assert!(!pages.contains(&Page::Donate));
        assert!(!pages.contains(&Page::Contact));
        assert!(!pages.contains(&Page::Membership));
    }

    service.logout().unwrap();
    assert_eq!(
        header.pages(),
        vec![
            Page::Home,
            Page::About,
            Page::Projects,
            Page::Donate,
            Page::Contact,
            Page::Membership
        ]
    );
}

#[tokio::test]
async fn test_unmounted_nav_stops_listening() {
    let service = AuthService::with_mock_authenticator(SessionStore::in_memory());
    let nav = MountedNav::mount(&service);
    assert_eq!(service.notifier().listener_count(), 1);

    drop(nav);
    assert_eq!(service.notifier().listener_count(), 0);

    service
        .login(Credentials::new("member@hopehands.org", "member123", Role::Member))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_other_tab_login_is_picked_up_through_relay() {
    // two tabs sharing one origin storage
    let shared: Rc<MemoryStorage> = Rc::new(MemoryStorage::new());
    let tab_a = AuthService::with_mock_authenticator(SessionStore::new(shared.clone()));
    let tab_b = AuthService::with_mock_authenticator(SessionStore::new(shared.clone()));

    let nav_b = MountedNav::mount(&tab_b);
    let signals = Rc::new(RefCell::new(Vec::new()));
    let s = signals.clone();
    let _sub = tab_b.subscribe(move |signal| s.borrow_mut().push(signal.clone()));

    tab_a
        .login(Credentials::new("someone@example.org", "donor-2024", Role::Member))
        .await
        .unwrap();

    // tab B has not heard anything yet
    assert!(nav_b.pages().contains(&Page::Membership));

    // the browser delivers a storage event carrying only the key
    tab_b.relay_storage_event(Some("authToken"));
    assert!(nav_b.pages().contains(&Page::MemberDashboard));
    assert_eq!(
        *signals.borrow(),
        vec![AuthSignal::StorageChanged {
            key: Some("authToken".to_string())
        }]
    );
}

#[tokio::test]
async fn test_rejected_login_keeps_guards_closed() {
    let service = AuthService::with_mock_authenticator(SessionStore::in_memory());

    let result = service
        .login(Credentials::new("x@y.com", "wrong1", Role::Member))
        .await;
    assert_eq!(result, Err(AuthError::InvalidCredentials));

    let session = service.current();
    assert_eq!(
        guard::check(Page::MemberDashboard, &session),
        GuardDecision::Redirect(Page::Login)
    );
    assert_eq!(
        navigation::resolve_actions(&session, false),
        vec![AuthAction::Login, AuthAction::JoinUs]
    );
}

#[tokio::test]
async fn test_session_survives_service_rebuild() {
    // a reload builds a fresh service over the same persistent storage
    let storage: Rc<MemoryStorage> = Rc::new(MemoryStorage::new());

    let before = AuthService::with_mock_authenticator(SessionStore::new(storage.clone()));
    before
        .login(Credentials::new("member@hopehands.org", "member123", Role::Member))
        .await
        .unwrap();

    let after = AuthService::with_mock_authenticator(SessionStore::new(storage.clone()));
    let session = after.current();
    assert_eq!(session.role(), Some(Role::Member));
    assert_eq!(session.email(), Some("member@hopehands.org"));
    assert_eq!(
        storage.get("userRole").unwrap().as_deref(),
        Some("member")
    );
}
