//! Skills admin page

use leptos::prelude::*;

use super::resource::{row_key, use_resource_page, ResourcePage};
use super::{field, or_dash, PageHeader};
use crate::components::{ConfirmDeleteModal, FormModal, Pagination, TextField, Toolbar};
use crate::config::page_size;
use crate::forms::SkillForm;
use crate::models::Skill;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let page: ResourcePage<Skill> = use_resource_page(page_size::SKILLS);
    let list = page.list;

    view! {
        <section class="admin-page">
            <PageHeader title="Skills" loading=page.loading />
            <Toolbar
                list=list
                all_label="All categories"
                placeholder="Search skills..."
                on_add=Callback::new(move |()| page.open_add())
                add_label="Add skill"
            />
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.page_items.get() key=row_key let:skill>
                        <SkillRow skill=skill page=page />
                    </For>
                </tbody>
            </table>
            <Pagination list=list empty_message="No skills match." />

            <Show when=move || page.editor.with(|e| e.is_open())>
                <SkillEditor page=page />
            </Show>
            <Show when=move || page.deleting.with(|d| d.is_open())>
                <ConfirmDeleteModal
                    subject=Signal::derive(move || page.deleting.with(|d| {
                        d.target().map(|s| format!("skill \"{}\"", s.name)).unwrap_or_default()
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
fn SkillRow(skill: Skill, page: ResourcePage<Skill>) -> impl IntoView {
    let to_edit = skill.clone();
    let to_delete = skill.clone();

    view! {
        <tr>
            <td>{skill.name}</td>
            <td>{or_dash(skill.category.as_deref())}</td>
            <td class="actions">
                <button class="btn btn-small" on:click=move |_| page.open_edit(to_edit.clone())>"Edit"</button>
                <button class="btn btn-small btn-danger" on:click=move |_| page.ask_delete(to_delete.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn SkillEditor(page: ResourcePage<Skill>) -> impl IntoView {
    let form = page.form;
    let (name, set_name) = field(form, |f: &SkillForm| &f.name, |f: &mut SkillForm| &mut f.name);
    let (category, set_category) = field(form, |f: &SkillForm| &f.category, |f: &mut SkillForm| &mut f.category);

    let title = Signal::derive(move || {
        let title = if page.is_editing() { "Edit skill" } else { "Add skill" };
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
            <TextField label="Category" value=category on_input=set_category placeholder="e.g. Languages" />
        </FormModal>
    }
}
