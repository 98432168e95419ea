//! Client-held session record

use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, warn};

use crate::auth::Role;
use crate::error::StorageError;
use crate::storage::{
    KeyValueStorage, MemoryStorage, AUTH_TOKEN_KEY, SESSION_KEYS, USER_EMAIL_KEY, USER_ROLE_KEY,
};

const PROBE_KEY: &str = "__hopehands_probe__";

/// Snapshot of the session fields
///
/// `role` and `email` are only populated when a token is present. The role
/// is not bound to the token and must only drive cosmetic decisions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub token_present: bool,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(token: &str, role: Role, email: impl Into<String>) -> Self {
        Self {
            token_present: true,
            role: Some(role),
            email: Some(email.into()),
            issued_at: token_issued_at(token),
        }
    }

    pub fn role(&self) -> Option<Role> {
        if self.token_present {
            self.role
        } else {
            None
        }
    }

    pub fn email(&self) -> Option<&str> {
        if self.token_present {
            self.email.as_deref()
        } else {
            None
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// True if the session is older than `ttl` at `now`. Sessions whose
    /// token carries no timestamp never expire.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        match self.issued_at {
            Some(issued_at) if self.token_present => now.signed_duration_since(issued_at) >= ttl,
            _ => false,
        }
    }
}

/// Build the opaque token stored for a new session
pub fn issue_token(role: Role, now: DateTime<Utc>) -> String {
    format!("jwt.token.{}.{}", role.as_str(), now.timestamp_millis())
}

/// Recover the issue time from a token built by [`issue_token`]
pub fn token_issued_at(token: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = token.rsplit('.').next()?.parse().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Session record persisted in a [`KeyValueStorage`]
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStorage>,
    degraded: bool,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            backend,
            degraded: false,
        }
    }

    /// In-memory store
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Open the store on `primary`, falling back to memory if it is missing
    /// or rejects a probe write. A fallback store reports [`Self::is_degraded`].
    pub fn open(primary: Option<Rc<dyn KeyValueStorage>>) -> Self {
        let Some(primary) = primary else {
            warn!("No persistent storage available, session will not survive a reload");
            return Self::degraded();
        };

        match probe(primary.as_ref()) {
            Ok(()) => Self::new(primary),
            Err(e) => {
                warn!(error = %e, "Persistent storage rejected probe, using in-memory session");
                Self::degraded()
            }
        }
    }

    fn degraded() -> Self {
        Self {
            backend: Rc::new(MemoryStorage::new()),
            degraded: true,
        }
    }

    /// Whether the session lives in fallback memory only
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Persist a session, replacing any previous one
    pub fn write(&self, token: &str, role: Role, email: &str) -> Result<(), StorageError> {
        let fields = [
            (AUTH_TOKEN_KEY, token),
            (USER_ROLE_KEY, role.as_str()),
            (USER_EMAIL_KEY, email),
        ];

        for (key, value) in fields {
            if let Err(e) = self.backend.set(key, value) {
                warn!(key, error = %e, "Session write failed, rolling back");
                self.remove_all();
                return Err(e);
            }
        }

        debug!(role = %role, "Session written");
        Ok(())
    }

    /// Remove every session field
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(e) = self.backend.remove(key) {
                warn!(key, error = %e, "Failed to remove session field");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                debug!("Session cleared");
                Ok(())
            }
        }
    }

    /// Read the current session. Unreadable fields count as absent.
    pub fn read(&self) -> Session {
        // An empty token counts as signed out
        let token = self.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty());
        let Some(token) = token else {
            return Session::anonymous();
        };

        let role = self.get(USER_ROLE_KEY).and_then(|value| {
            let role = Role::parse(&value);
            if role.is_none() {
                debug!(value = %value, "Ignoring unknown stored role");
            }
            role
        });

        Session {
            token_present: true,
            role,
            email: self.get(USER_EMAIL_KEY),
            issued_at: token_issued_at(&token),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read session field");
                None
            }
        }
    }

    fn remove_all(&self) {
        for key in SESSION_KEYS {
            let _ = self.backend.remove(key);
        }
    }
}

fn probe(storage: &dyn KeyValueStorage) -> Result<(), StorageError> {
    storage.set(PROBE_KEY, "1")?;
    storage.remove(PROBE_KEY)
}
