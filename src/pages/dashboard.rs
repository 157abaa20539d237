//! Dashboard overview: one card per collection

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::dashboard::{fetch_counts, DashboardCounts};
use crate::context::use_app;
use crate::store::AppStateStoreFields;

#[component]
fn CountCard(label: &'static str, href: &'static str, #[prop(into)] count: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <A href=href attr:class="count-card">
            <span class="count-value">
                {move || count.get().map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}
            </span>
            <span class="count-label">{label}</span>
        </A>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let counts = RwSignal::new(None::<DashboardCounts>);

    spawn_local(async move {
        let loaded = fetch_counts(&ctx.api()).await;
        log::debug!("[dashboard] {} records in total", loaded.total());
        counts.set(Some(loaded));
    });

    let count = move |pick: fn(&DashboardCounts) -> Option<usize>| {
        Signal::derive(move || counts.with(|c| c.as_ref().and_then(pick)))
    };
    let greeting = move || {
        store
            .user()
            .with(|u| u.as_ref().map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() }))
            .map(|name| format!("Welcome back, {}", name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <section class="admin-page dashboard">
            <header class="page-header">
                <h1>{greeting}</h1>
                <Show when=move || counts.with(Option::is_none)>
                    <span class="loading">"Loading..."</span>
                </Show>
            </header>
            <div class="count-grid">
                <CountCard label="Companies" href="/dashboard/companies" count=count(|c| c.companies) />
                <CountCard label="Jobs" href="/dashboard/jobs" count=count(|c| c.jobs) />
                <CountCard label="Mentors" href="/dashboard/mentors" count=count(|c| c.mentors) />
                <CountCard label="Categories" href="/dashboard/categories" count=count(|c| c.categories) />
                <CountCard label="Skills" href="/dashboard/skills" count=count(|c| c.skills) />
                <CountCard label="Team" href="/dashboard/team" count=count(|c| c.team) />
            </div>
            <p class="dashboard-total">
                {move || counts.with(|c| c.as_ref().map(|c| format!("{} records across all collections", c.total())))}
            </p>
        </section>
    }
}
