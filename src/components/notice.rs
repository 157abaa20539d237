//! Notice toast

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::{AppStateStoreFields, NoticeKind};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    view! {
        {move || store.notice().get().map(|n| {
            let class = match n.kind {
                NoticeKind::Info => "notice notice-info",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class role="status">
                    <span>{n.message}</span>
                    <button class="notice-close" aria-label="Dismiss" on:click=move |_| store.notice().set(None)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
