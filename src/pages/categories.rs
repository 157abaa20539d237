//! Categories admin page

use leptos::prelude::*;

use super::resource::{row_key, use_resource_page, ResourcePage};
use super::{field, PageHeader};
use crate::components::{ConfirmDeleteModal, FormModal, Pagination, SelectField, TextField, Toolbar};
use crate::config::page_size;
use crate::forms::CategoryForm;
use crate::models::Category;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let page: ResourcePage<Category> = use_resource_page(page_size::CATEGORIES);
    let list = page.list;

    view! {
        <section class="admin-page">
            <PageHeader title="Categories" loading=page.loading />
            <Toolbar
                list=list
                all_label="All parents"
                placeholder="Search categories..."
                on_add=Callback::new(move |()| page.open_add())
                add_label="Add category"
            />
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Parent"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.page_items.get() key=row_key let:category>
                        <CategoryRow category=category page=page />
                    </For>
                </tbody>
            </table>
            <Pagination list=list empty_message="No categories match." />

            <Show when=move || page.editor.with(|e| e.is_open())>
                <CategoryEditor page=page />
            </Show>
            <Show when=move || page.deleting.with(|d| d.is_open())>
                <ConfirmDeleteModal
                    subject=Signal::derive(move || page.deleting.with(|d| {
                        d.target().map(|c| format!("category \"{}\"", c.name)).unwrap_or_default()
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
fn CategoryRow(category: Category, page: ResourcePage<Category>) -> impl IntoView {
    let parent = category
        .parent
        .as_ref()
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| "-".to_string());
    let to_edit = category.clone();
    let to_delete = category.clone();

    view! {
        <tr>
            <td>{category.name}</td>
            <td>{parent}</td>
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
fn CategoryEditor(page: ResourcePage<Category>) -> impl IntoView {
    let form = page.form;
    let (name, set_name) = field(form, |f: &CategoryForm| &f.name, |f: &mut CategoryForm| &mut f.name);
    let (parent, set_parent) = field(form, |f: &CategoryForm| &f.parent, |f: &mut CategoryForm| &mut f.parent);

    // any loaded category except the one being edited can be the parent
    let parents = Signal::derive(move || {
        let editing = page
            .editor
            .with(|e| e.target().and_then(|t| t.as_ref()).map(|c| c.id.clone()));
        page.list.items.with(|all| {
            all.iter()
                .filter(|c| Some(&c.id) != editing.as_ref())
                .map(|c| (c.id.clone(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let title = Signal::derive(move || {
        let title = if page.is_editing() { "Edit category" } else { "Add category" };
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
            <SelectField
                label="Parent category"
                value=parent
                options=parents
                on_change=set_parent
                empty_label="None (top level)"
            />
        </FormModal>
    }
}
