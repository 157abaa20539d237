//! CareerBridge Frontend App
//!
//! Root component: shared state, context and routes.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::AdminLayout;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    CategoriesPage, CompaniesPage, DashboardPage, HomePage, JobsPage, LoginPage, MentorsPage, RegisterPage,
    SkillsPage, TeamPage,
};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = ApiClient::browser(&config);
    let store = Store::new(AppState::new(api.session().user()));
    log::info!("[app] api at {}, signed in: {}", config.api_url, api.session().is_signed_in());

    provide_context(AppContext::new(api, store));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("/dashboard") view=AdminLayout>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("companies") view=CompaniesPage />
                    <Route path=path!("jobs") view=JobsPage />
                    <Route path=path!("mentors") view=MentorsPage />
                    <Route path=path!("categories") view=CategoriesPage />
                    <Route path=path!("skills") view=SkillsPage />
                    <Route path=path!("team") view=TeamPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
