//! Application Context
//!
//! API client and store handle provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{auth, ApiClient};
use crate::error::ApiError;
use crate::store::{store_dismiss_notice, store_show_notice, AppStateStoreFields, AppStore, NoticeKind};

#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(api: ApiClient, store: AppStore) -> Self {
        Self {
            api: StoredValue::new(api),
            store,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn is_signed_in(&self) -> bool {
        self.api.with_value(|api| api.session().is_signed_in())
    }

    pub fn sign_out(&self) {
        self.api.with_value(auth::logout);
        self.store.user().set(None);
    }

    /// Show a notice that dismisses itself after a few seconds
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let store = self.store;
        let id = store_show_notice(&store, kind, message.into());
        spawn_local(async move {
            notice_delay().await;
            store_dismiss_notice(&store, id);
        });
    }

    /// Log a failed call and tell the user about it
    pub fn report(&self, action: &str, error: &ApiError) {
        log::error!("[ui] {} failed: {}", action, error);
        // a 401 has already sent the browser to the login page
        if *error != ApiError::Unauthorized {
            self.notify(NoticeKind::Error, format!("Could not {}: {}", action, error));
        }
    }
}

/// Browser timer. Native builds only run tests, where notices stay up.
async fn notice_delay() {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(crate::config::NOTICE_TIMEOUT_MS).await;
    #[cfg(not(target_family = "wasm"))]
    futures::future::pending::<()>().await;
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
