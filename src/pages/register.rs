//! Registration page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::auth;
use crate::components::SiteHeader;
use crate::config::DASHBOARD_ROUTE;
use crate::context::use_app;
use crate::store::AppStateStoreFields;

/// Minimum password length accepted before calling the API
const MIN_PASSWORD_LEN: usize = 8;

/// First problem with the filled-in form, if any
fn check(name: &str, email: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Some("Name and email are required");
    }
    if !email.contains('@') {
        return Some("Enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters");
    }
    if password != confirm {
        return Some("Passwords do not match");
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Some(problem) = check(&name_value, &email_value, &password_value, &confirm.get_untracked()) {
            error.set(Some(problem.to_string()));
            return;
        }
        loading.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::register(&ctx.api(), &name_value, &email_value, &password_value).await {
                Ok(session) => {
                    ctx.store.user().set(Some(session.user));
                    navigate(DASHBOARD_ROUTE, Default::default());
                }
                Err(e) => {
                    log::warn!("[auth] registration failed: {}", e);
                    error.set(Some(auth::failure_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    let input = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-field">
                <label class="form-label">{label}</label>
                <input
                    type=kind
                    class="form-input"
                    prop:value=move || value.get()
                    on:input=move |e| value.set(event_target_value(&e))
                />
            </div>
        }
    };

    view! {
        <div class="page page-auth">
            <SiteHeader />
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=submit>
                    {move || error.get().map(|e| view! { <div class="form-error-banner">{e}</div> })}
                    {input("Name", "text", name)}
                    {input("Email", "email", email)}
                    {input("Password", "password", password)}
                    {input("Confirm password", "password", confirm)}
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert_eq!(check("", "a@b.c", "password1", "password1"), Some("Name and email are required"));
        assert_eq!(check("Ada", "nope", "password1", "password1"), Some("Enter a valid email address"));
        assert_eq!(check("Ada", "a@b.c", "short", "short"), Some("Password must be at least 8 characters"));
        assert_eq!(check("Ada", "a@b.c", "password1", "password2"), Some("Passwords do not match"));
        assert_eq!(check("Ada", "a@b.c", "password1", "password1"), None);
    }
}
