//! Login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::auth;
use crate::components::SiteHeader;
use crate::config::DASHBOARD_ROUTE;
use crate::context::use_app;
use crate::store::AppStateStoreFields;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        loading.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::login(&ctx.api(), &email_value, &password_value).await {
                Ok(session) => {
                    ctx.store.user().set(Some(session.user));
                    navigate(DASHBOARD_ROUTE, Default::default());
                }
                Err(e) => {
                    log::warn!("[auth] login failed: {}", e);
                    error.set(Some(auth::failure_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page page-auth">
            <SiteHeader />
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=submit>
                    {move || error.get().map(|e| view! { <div class="form-error-banner">{e}</div> })}
                    <div class="form-field">
                        <label class="form-label">"Email"</label>
                        <input
                            type="email"
                            class="form-input"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |e| email.set(event_target_value(&e))
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Password"</label>
                        <input
                            type="password"
                            class="form-input"
                            prop:value=move || password.get()
                            on:input=move |e| password.set(event_target_value(&e))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "No account yet? " <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
