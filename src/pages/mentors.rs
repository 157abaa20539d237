//! Mentors admin page

use leptos::prelude::*;

use super::resource::{detail_body, row_key, use_resource_page, ResourcePage};
use super::{field, or_dash, PageHeader};
use crate::components::{ConfirmDeleteModal, FormModal, Modal, Pagination, TextField, Toolbar};
use crate::config::page_size;
use crate::forms::MentorForm;
use crate::models::Mentor;

fn years(experience: Option<u32>) -> String {
    match experience {
        Some(1) => "1 year".to_string(),
        Some(n) => format!("{} years", n),
        None => "-".to_string(),
    }
}

#[component]
pub fn MentorsPage() -> impl IntoView {
    let page: ResourcePage<Mentor> = use_resource_page(page_size::MENTORS);
    let list = page.list;

    view! {
        <section class="admin-page">
            <PageHeader title="Mentors" loading=page.loading />
            <Toolbar
                list=list
                all_label="All expertise"
                placeholder="Search by name or email..."
                on_add=Callback::new(move |()| page.open_add())
                add_label="Add mentor"
            />
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Expertise"</th>
                        <th>"Experience"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.page_items.get() key=row_key let:mentor>
                        <MentorRow mentor=mentor page=page />
                    </For>
                </tbody>
            </table>
            <Pagination list=list empty_message="No mentors match." />

            <Show when=move || page.detail.with(|d| d.is_open())>
                <Modal title="Mentor".to_string() on_close=Callback::new(move |()| page.close_detail())>
                    {move || page.detail.with(|d| {
                        d.target().map(|state| detail_body(state, |m| view! { <MentorDetail mentor=m.clone() /> }.into_any()))
                    })}
                </Modal>
            </Show>
            <Show when=move || page.editor.with(|e| e.is_open())>
                <MentorEditor page=page />
            </Show>
            <Show when=move || page.deleting.with(|d| d.is_open())>
                <ConfirmDeleteModal
                    subject=Signal::derive(move || page.deleting.with(|d| {
                        d.target().map(|m| format!("mentor \"{}\"", m.name)).unwrap_or_default()
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
fn MentorRow(mentor: Mentor, page: ResourcePage<Mentor>) -> impl IntoView {
    let id = mentor.id.clone();
    let to_edit = mentor.clone();
    let to_delete = mentor.clone();

    view! {
        <tr>
            <td>{mentor.name}</td>
            <td>{or_dash(Some(mentor.email.as_str()))}</td>
            <td>{or_dash(mentor.expertise.as_deref())}</td>
            <td>{years(mentor.experience)}</td>
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
fn MentorDetail(mentor: Mentor) -> impl IntoView {
    view! {
        <div class="record-detail">
            <h3>{mentor.name}</h3>
            <dl>
                <dt>"Email"</dt>
                <dd>{or_dash(Some(mentor.email.as_str()))}</dd>
                <dt>"Expertise"</dt>
                <dd>{or_dash(mentor.expertise.as_deref())}</dd>
                <dt>"Experience"</dt>
                <dd>{years(mentor.experience)}</dd>
                <dt>"Company"</dt>
                <dd>{or_dash(mentor.company.as_deref())}</dd>
            </dl>
            <p class="detail-description">{mentor.bio.unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn MentorEditor(page: ResourcePage<Mentor>) -> impl IntoView {
    let form = page.form;
    let (name, set_name) = field(form, |f: &MentorForm| &f.name, |f: &mut MentorForm| &mut f.name);
    let (email, set_email) = field(form, |f: &MentorForm| &f.email, |f: &mut MentorForm| &mut f.email);
    let (expertise, set_expertise) =
        field(form, |f: &MentorForm| &f.expertise, |f: &mut MentorForm| &mut f.expertise);
    let (experience, set_experience) =
        field(form, |f: &MentorForm| &f.experience, |f: &mut MentorForm| &mut f.experience);
    let (company, set_company) = field(form, |f: &MentorForm| &f.company, |f: &mut MentorForm| &mut f.company);
    let (bio, set_bio) = field(form, |f: &MentorForm| &f.bio, |f: &mut MentorForm| &mut f.bio);

    let title = Signal::derive(move || {
        let title = if page.is_editing() { "Edit mentor" } else { "Add mentor" };
        title.to_string()
    });

    view! {
        <FormModal
            title=title
            error=page.form_error
            pending=page.pending
            on_submit=Callback::new(move |()| page.submit())
            on_cancel=Callback::new(move |()| page.close_editor())
        >
            <TextField label="Name" value=name on_input=set_name required=true />
            <TextField label="Email" input_type="email" value=email on_input=set_email required=true />
            <TextField label="Expertise" value=expertise on_input=set_expertise placeholder="e.g. Backend" />
            <TextField label="Years of experience" input_type="number" value=experience on_input=set_experience />
            <TextField label="Company" value=company on_input=set_company />
            <TextField label="Bio" value=bio on_input=set_bio multiline=true />
        </FormModal>
    }
}
