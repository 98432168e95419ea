//! Client-side session: store, change broadcast and the service tying
//! them to an authenticator.

mod notifier;
mod service;
mod store;

pub use notifier::{AuthNotifier, AuthSignal, Subscription};
pub use service::AuthService;
pub use store::{issue_token, token_issued_at, Session, SessionStore};
