// HopeHands - Site Core
//
// Platform-neutral logic behind the HopeHands website: the client-held
// session, the auth change broadcast, role-aware navigation, route guards
// and the membership/contact/signup forms. The Dioxus frontend in
// packages/web-dioxus renders on top of this crate.

pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod navigation;
pub mod session;
pub mod storage;

pub use auth::{AuthGrant, Authenticator, Credentials, MockAuthenticator, Role};
pub use config::SiteConfig;
pub use error::{AuthError, FormError, SignupError, StorageError};
pub use navigation::{AuthAction, NavEntry, NavIcon, Page};
pub use session::{AuthNotifier, AuthService, AuthSignal, Session, SessionStore, Subscription};
pub use storage::{KeyValueStorage, MemoryStorage};
