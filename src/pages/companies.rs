//! Companies admin page

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use super::resource::{detail_body, row_key, use_resource_page, ResourcePage};
use super::{field, or_dash, PageHeader};
use crate::components::{ConfirmDeleteModal, FileField, FormModal, Modal, Pagination, TextField, Toolbar};
use crate::config::page_size;
use crate::forms::{CompanyForm, Upload};
use crate::models::Company;

/// Read a picked file into memory
async fn read_upload(file: web_sys::File) -> Result<Upload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(Upload {
        file_name: file.name(),
        content_type,
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let page: ResourcePage<Company> = use_resource_page(page_size::COMPANIES);
    let list = page.list;

    view! {
        <section class="admin-page">
            <PageHeader title="Companies" loading=page.loading />
            <Toolbar
                list=list
                all_label="All locations"
                placeholder="Search by name or email..."
                on_add=Callback::new(move |()| page.open_add())
                add_label="Add company"
            />
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Location"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.page_items.get() key=row_key let:company>
                        <CompanyRow company=company page=page />
                    </For>
                </tbody>
            </table>
            <Pagination list=list empty_message="No companies match." />

            <Show when=move || page.detail.with(|d| d.is_open())>
                <Modal title="Company".to_string() on_close=Callback::new(move |()| page.close_detail())>
                    {move || page.detail.with(|d| {
                        d.target().map(|state| detail_body(state, |c| view! { <CompanyDetail company=c.clone() /> }.into_any()))
                    })}
                </Modal>
            </Show>
            <Show when=move || page.editor.with(|e| e.is_open())>
                <CompanyEditor page=page />
            </Show>
            <Show when=move || page.deleting.with(|d| d.is_open())>
                <ConfirmDeleteModal
                    subject=Signal::derive(move || page.deleting.with(|d| {
                        d.target().map(|c| format!("company \"{}\"", c.name)).unwrap_or_default()
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
fn CompanyRow(company: Company, page: ResourcePage<Company>) -> impl IntoView {
    let id = company.id.clone();
    let to_edit = company.clone();
    let to_delete = company.clone();

    view! {
        <tr>
            <td>
                {company.logo.clone().map(|src| view! { <img class="row-logo" src=src alt="" /> })}
                {company.name.clone()}
            </td>
            <td>{or_dash(Some(company.email.as_str()))}</td>
            <td>{or_dash(company.location.as_deref())}</td>
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
fn CompanyDetail(company: Company) -> impl IntoView {
    view! {
        <div class="record-detail">
            {company.logo.map(|src| view! { <img class="detail-logo" src=src alt="" /> })}
            <h3>{company.name}</h3>
            <dl>
                <dt>"Email"</dt>
                <dd>{or_dash(Some(company.email.as_str()))}</dd>
                <dt>"Website"</dt>
                <dd>
                    {match company.website.filter(|w| !w.trim().is_empty()) {
                        Some(url) => {
                            let href = url.clone();
                            view! { <a href=href target="_blank" rel="noopener">{url}</a> }.into_any()
                        }
                        None => "-".into_any(),
                    }}
                </dd>
                <dt>"Location"</dt>
                <dd>{or_dash(company.location.as_deref())}</dd>
            </dl>
            <p class="detail-description">{company.description.unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn CompanyEditor(page: ResourcePage<Company>) -> impl IntoView {
    let form = page.form;
    let (name, set_name) = field(form, |f: &CompanyForm| &f.name, |f: &mut CompanyForm| &mut f.name);
    let (email, set_email) = field(form, |f: &CompanyForm| &f.email, |f: &mut CompanyForm| &mut f.email);
    let (website, set_website) = field(form, |f: &CompanyForm| &f.website, |f: &mut CompanyForm| &mut f.website);
    let (location, set_location) =
        field(form, |f: &CompanyForm| &f.location, |f: &mut CompanyForm| &mut f.location);
    let (description, set_description) =
        field(form, |f: &CompanyForm| &f.description, |f: &mut CompanyForm| &mut f.description);

    let on_pick = Callback::new(move |file: Option<web_sys::File>| {
        let Some(file) = file else {
            form.update(|f| f.logo = None);
            return;
        };
        spawn_local(async move {
            match read_upload(file).await {
                Ok(upload) => form.update(|f| f.logo = Some(upload)),
                Err(e) => {
                    log::error!("[ui] could not read logo: {}", e);
                    page.form_error.set(Some("Could not read the selected file".to_string()));
                }
            }
        });
    });

    let title = Signal::derive(move || {
        let title = if page.is_editing() { "Edit company" } else { "Add company" };
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
            <TextField label="Website" input_type="url" value=website on_input=set_website />
            <TextField label="Location" value=location on_input=set_location />
            <TextField label="Description" value=description on_input=set_description multiline=true />
            <FileField label="Logo" accept="image/*" on_pick=on_pick />
        </FormModal>
    }
}
