// =============================================================================
// Layouts
// =============================================================================
// 1. Public site chrome (header, footer)
// 2. Admin shell (guard, sidebar, notice)
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::components::NoticeToast;
use crate::config::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use crate::context::use_app;
use crate::store::AppStateStoreFields;

// -----------------------------------------------------------------------------
// 1. Public site chrome
// -----------------------------------------------------------------------------

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let signed_in = move || store.user().with(Option::is_some) || ctx.is_signed_in();

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-logo">"CareerBridge"</A>
            <nav class="site-nav">
                <a href="/#opportunities">"Opportunities"</a>
                <a href="/#mentors">"Mentors"</a>
                <a href="/#faq">"FAQ"</a>
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <A href="/login" attr:class="btn btn-secondary">"Sign in"</A>
                        <A href="/register" attr:class="btn btn-primary">"Join"</A>
                    }
                >
                    <A href=DASHBOARD_ROUTE attr:class="btn btn-primary">"Dashboard"</A>
                </Show>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Jobs, internships, mentorships, courses and competitions in one place."</p>
            <p class="copyright">"© CareerBridge"</p>
        </footer>
    }
}

// -----------------------------------------------------------------------------
// 2. Admin shell
// -----------------------------------------------------------------------------

/// Sidebar entries: (route, label)
const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Overview"),
    ("/dashboard/companies", "Companies"),
    ("/dashboard/jobs", "Jobs"),
    ("/dashboard/mentors", "Mentors"),
    ("/dashboard/categories", "Categories"),
    ("/dashboard/skills", "Skills"),
    ("/dashboard/team", "Team"),
];

#[component]
fn Sidebar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let navigate = use_navigate();

    let logout = move |_| {
        ctx.sign_out();
        navigate(LOGIN_ROUTE, Default::default());
    };

    view! {
        <aside class="admin-sidebar">
            <div class="sidebar-brand">"CareerBridge Admin"</div>
            <nav class="sidebar-nav">
                {ADMIN_LINKS
                    .iter()
                    .map(|(href, label)| view! {
                        <A href=*href exact=true attr:class="sidebar-link">{*label}</A>
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-footer">
                <span class="sidebar-user">
                    {move || store.user().with(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                </span>
                <button class="btn btn-secondary" on:click=logout>"Log out"</button>
            </div>
        </aside>
    }
}

/// Wraps every `/dashboard` route. Without a stored token it sends the
/// visitor to the login page.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    // re-checked whenever the signed-in user changes
    let signed_in = move || store.user().with(|_| ctx.is_signed_in());

    view! {
        <Show
            when=signed_in
            fallback=|| view! { <Redirect path=LOGIN_ROUTE /> }
        >
            <div class="admin-layout">
                <Sidebar />
                <main class="admin-content">
                    <Outlet />
                </main>
                <NoticeToast />
            </div>
        </Show>
    }
}
