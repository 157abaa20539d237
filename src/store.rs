//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient message shown in the corner of the admin pages
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Distinguishes notices so an old timer cannot dismiss a newer one
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// State shared across pages
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in admin, mirrored from the session store
    pub user: Option<User>,
    pub notice: Option<Notice>,
    /// Id handed to the next notice
    pub next_notice: u64,
}

impl AppState {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the current notice, returning the new notice's id
pub fn store_show_notice(store: &AppStore, kind: NoticeKind, message: String) -> u64 {
    let id = store.next_notice().get_untracked();
    store.next_notice().set(id + 1);
    store.notice().set(Some(Notice { id, kind, message }));
    id
}

/// Clear the notice if it is still the one with `id`
pub fn store_dismiss_notice(store: &AppStore, id: u64) {
    let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.id));
    if current == Some(id) {
        store.notice().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_notice_timer_does_not_dismiss_newer() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());

            let first = store_show_notice(&store, NoticeKind::Error, "first".to_string());
            let second = store_show_notice(&store, NoticeKind::Info, "second".to_string());
            assert_ne!(first, second);

            store_dismiss_notice(&store, first);
            assert_eq!(
                store.notice().get_untracked().map(|n| n.message),
                Some("second".to_string())
            );

            store_dismiss_notice(&store, second);
            assert_eq!(store.notice().get_untracked(), None);
        });
    }
}
