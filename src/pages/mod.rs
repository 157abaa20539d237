//! Routed pages

mod categories;
mod companies;
mod dashboard;
mod home;
mod jobs;
mod login;
mod mentors;
mod register;
mod resource;
mod skills;
mod team;

pub use categories::CategoriesPage;
pub use companies::CompaniesPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use jobs::JobsPage;
pub use login::LoginPage;
pub use mentors::MentorsPage;
pub use register::RegisterPage;
pub use skills::SkillsPage;
pub use team::TeamPage;

use leptos::prelude::*;

/// Bind one text field of a form signal to an input
pub(crate) fn field<F>(
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F) -> &mut String,
) -> (Signal<String>, Callback<String>)
where
    F: Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(|f| get(f).clone())),
        Callback::new(move |value: String| form.update(|f| *set(f) = value)),
    )
}

/// Title row of an admin page
#[component]
pub(crate) fn PageHeader(title: &'static str, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{title}</h1>
            <Show when=move || loading.get()>
                <span class="loading">"Loading..."</span>
            </Show>
        </header>
    }
}

/// `value` or a dash when empty
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
