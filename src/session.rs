//! Session Storage
//!
//! Bearer token and signed-in user, behind a trait so the API client does not
//! care whether they live in local storage or in memory.

use std::sync::{Arc, Mutex};

use gloo_storage::{LocalStorage, Storage};

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::models::User;

/// Read/write/clear access to the persisted session
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn save(&self, token: &str, user: &User);
    fn clear(&self);

    fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }
}

/// Session kept in the browser's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.is_empty())
    }

    fn user(&self) -> Option<User> {
        LocalStorage::get(USER_KEY).ok()
    }

    fn save(&self, token: &str, user: &User) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
            log::error!("[session] failed to store token: {}", e);
        }
        if let Err(e) = LocalStorage::set(USER_KEY, user) {
            log::error!("[session] failed to store user: {}", e);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

/// Session that only lives as long as the page
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: Mutex<Option<(String, User)>>,
}

impl MemorySession {
    #[cfg(test)]
    pub fn signed_in(token: &str, user: User) -> Self {
        Self {
            inner: Mutex::new(Some((token.to_string(), user))),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        let guard = self.inner.lock().ok()?;
        guard.as_ref().map(|(token, _)| token.clone())
    }

    fn user(&self) -> Option<User> {
        let guard = self.inner.lock().ok()?;
        guard.as_ref().map(|(_, user)| user.clone())
    }

    fn save(&self, token: &str, user: &User) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some((token.to_string(), user.clone()));
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = None;
        }
    }
}

/// Local storage when the browser allows it, memory otherwise (private mode)
pub fn browser_store() -> Arc<dyn SessionStore> {
    let available = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .is_some();
    if available {
        Arc::new(BrowserSession)
    } else {
        log::warn!("[session] local storage unavailable, session will not persist");
        Arc::new(MemorySession::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: "u1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_memory_session_round_trip() {
        let session = MemorySession::default();
        assert!(!session.is_signed_in());

        session.save("abc", &admin());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.user().map(|u| u.email), Some("admin@example.com".to_string()));

        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
    }
}
