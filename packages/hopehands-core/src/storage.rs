//! String-keyed storage backing the client session
//!
//! The browser build plugs `localStorage` in behind [`KeyValueStorage`];
//! tests, server-side rendering and the degraded fallback use
//! [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// Key holding the opaque session token
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Key holding the session role (`member` | `admin`)
pub const USER_ROLE_KEY: &str = "userRole";
/// Key holding the signed-in email
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Every key the session layout owns
pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, USER_ROLE_KEY, USER_EMAIL_KEY];

/// Synchronous key/value medium
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Returns true if `key` belongs to the session layout
pub fn is_session_key(key: &str) -> bool {
    SESSION_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set(AUTH_TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        storage.set(AUTH_TOKEN_KEY, "def").unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("def"));
        assert_eq!(storage.len(), 1);

        storage.remove(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("nope").is_ok());
    }

    #[test]
    fn test_session_keys() {
        assert!(is_session_key("authToken"));
        assert!(is_session_key("userRole"));
        assert!(is_session_key("userEmail"));
        assert!(!is_session_key("theme"));
    }
}
