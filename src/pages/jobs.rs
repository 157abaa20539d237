//! Jobs admin page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::resource::{detail_body, row_key, use_resource_page, ResourcePage};
use super::{field, or_dash, PageHeader};
use crate::api::{resources, Resource};
use crate::components::{ConfirmDeleteModal, FormModal, Modal, Pagination, SelectField, TextField, Toolbar};
use crate::config::page_size;
use crate::context::use_app;
use crate::forms::JobForm;
use crate::markdown::{excerpt, parse_markdown};
use crate::models::{Category, Company, Job};

/// Values offered by the job type dropdown
const JOB_TYPES: &[&str] = &["full-time", "part-time", "internship", "contract", "remote"];

/// `(id, name)` choices for the company and category dropdowns
#[derive(Clone, Copy)]
struct Choices {
    companies: RwSignal<Vec<(String, String)>>,
    categories: RwSignal<Vec<(String, String)>>,
}

fn load_choices<R: Resource>(target: RwSignal<Vec<(String, String)>>, label: fn(&R) -> String) {
    let ctx = use_app();
    spawn_local(async move {
        match resources::list::<R>(&ctx.api()).await {
            Ok(rows) => target.set(rows.iter().map(|r| (r.id().to_string(), label(r))).collect()),
            Err(e) => ctx.report(&format!("load {} choices", R::NOUN), &e),
        }
    });
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let page: ResourcePage<Job> = use_resource_page(page_size::JOBS);
    let list = page.list;

    let choices = Choices {
        companies: RwSignal::new(Vec::new()),
        categories: RwSignal::new(Vec::new()),
    };
    load_choices::<Company>(choices.companies, |c| c.name.clone());
    load_choices::<Category>(choices.categories, |c| c.name.clone());

    view! {
        <section class="admin-page">
            <PageHeader title="Jobs" loading=page.loading />
            <Toolbar
                list=list
                all_label="All job types"
                placeholder="Search by title or company..."
                on_add=Callback::new(move |()| page.open_add())
                add_label="Post job"
            />
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Company"</th>
                        <th>"Type"</th>
                        <th>"Location"</th>
                        <th>"Description"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.page_items.get() key=row_key let:job>
                        <JobRow job=job page=page />
                    </For>
                </tbody>
            </table>
            <Pagination list=list empty_message="No jobs match." />

            <Show when=move || page.detail.with(|d| d.is_open())>
                <Modal title="Job".to_string() on_close=Callback::new(move |()| page.close_detail()) class="wide">
                    {move || page.detail.with(|d| {
                        d.target().map(|state| detail_body(state, |j| view! { <JobDetail job=j.clone() /> }.into_any()))
                    })}
                </Modal>
            </Show>
            <Show when=move || page.editor.with(|e| e.is_open())>
                <JobEditor page=page choices=choices />
            </Show>
            <Show when=move || page.deleting.with(|d| d.is_open())>
                <ConfirmDeleteModal
                    subject=Signal::derive(move || page.deleting.with(|d| {
                        d.target().map(|j| format!("job \"{}\"", j.title)).unwrap_or_default()
                    }))
                    pending=page.pending
                    on_confirm=Callback::new(move |()| page.confirm_delete())
                    on_cancel=Callback::new(move |()| page.cancel_delete())
                />
            </Show>
        </section>
    }
}

#[component]
fn JobRow(job: Job, page: ResourcePage<Job>) -> impl IntoView {
    let id = job.id.clone();
    let company = or_dash(job.company.as_ref().map(|c| c.label()));
    let summary = excerpt(&job.description, 80);
    let to_edit = job.clone();
    let to_delete = job.clone();

    view! {
        <tr>
            <td>{job.title}</td>
            <td>{company}</td>
            <td>{or_dash(job.job_type.as_deref())}</td>
            <td>{or_dash(job.location.as_deref())}</td>
            <td class="muted">{summary}</td>
            <td class="actions">
                <button class="btn btn-small" on:click=move |_| page.open_detail(id.clone())>"View"</button>
                <button class="btn btn-small" on:click=move |_| page.open_edit(to_edit.clone())>"Edit"</button>
                <button class="btn btn-small btn-danger" on:click=move |_| page.ask_delete(to_delete.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn JobDetail(job: Job) -> impl IntoView {
    let description = parse_markdown(&job.description);

    view! {
        <div class="record-detail">
            <h3>{job.title}</h3>
            <dl>
                <dt>"Company"</dt>
                <dd>{or_dash(job.company.as_ref().map(|c| c.label()))}</dd>
                <dt>"Category"</dt>
                <dd>{or_dash(job.category.as_ref().map(|c| c.label()))}</dd>
                <dt>"Type"</dt>
                <dd>{or_dash(job.job_type.as_deref())}</dd>
                <dt>"Location"</dt>
                <dd>{or_dash(job.location.as_deref())}</dd>
            </dl>
            <div class="markdown-body" inner_html=description></div>
        </div>
    }
}

#[component]
fn JobEditor(page: ResourcePage<Job>, choices: Choices) -> impl IntoView {
    let form = page.form;
    let (title, set_title) = field(form, |f: &JobForm| &f.title, |f: &mut JobForm| &mut f.title);
    let (company, set_company) = field(form, |f: &JobForm| &f.company, |f: &mut JobForm| &mut f.company);
    let (category, set_category) = field(form, |f: &JobForm| &f.category, |f: &mut JobForm| &mut f.category);
    let (location, set_location) = field(form, |f: &JobForm| &f.location, |f: &mut JobForm| &mut f.location);
    let (job_type, set_job_type) = field(form, |f: &JobForm| &f.job_type, |f: &mut JobForm| &mut f.job_type);
    let (description, set_description) =
        field(form, |f: &JobForm| &f.description, |f: &mut JobForm| &mut f.description);

    let job_types = Signal::derive(|| {
        JOB_TYPES
            .iter()
            .map(|t| (t.to_string(), t.to_string()))
            .collect::<Vec<_>>()
    });
    let title_text = Signal::derive(move || {
        let title = if page.is_editing() { "Edit job" } else { "Post job" };
        title.to_string()
    });

    view! {
        <FormModal
            title=title_text
            error=page.form_error
            pending=page.pending
            on_submit=Callback::new(move |()| page.submit())
            on_cancel=Callback::new(move |()| page.close_editor())
        >
            <TextField label="Title" value=title on_input=set_title required=true />
            <SelectField
                label="Company"
                value=company
                options=choices.companies
                on_change=set_company
                empty_label="Select a company"
                required=true
            />
            <SelectField label="Category" value=category options=choices.categories on_change=set_category />
            <SelectField label="Job type" value=job_type options=job_types on_change=set_job_type />
            <TextField label="Location" value=location on_input=set_location />
            <TextField
                label="Description (Markdown)"
                value=description
                on_input=set_description
                multiline=true
            />
        </FormModal>
    }
}
