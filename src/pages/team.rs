//! Team admin page

use leptos::prelude::*;

use super::resource::{row_key, use_resource_page, ResourcePage};
use super::{field, or_dash, PageHeader};
use crate::components::{ConfirmDeleteModal, FormModal, Pagination, TextField, Toolbar};
use crate::config::page_size;
use crate::forms::TeamMemberForm;
use crate::models::TeamMember;

#[component]
pub fn TeamPage() -> impl IntoView {
    let page: ResourcePage<TeamMember> = use_resource_page(page_size::TEAM);
    let list = page.list;

    view! {
        <section class="admin-page">
            <PageHeader title="Team" loading=page.loading />
            <Toolbar
                list=list
                all_label="All roles"
                placeholder="Search by name or email..."
                on_add=Callback::new(move |()| page.open_add())
                add_label="Add member"
            />
            <div class="team-grid">
                <For each=move || list.page_items.get() key=row_key let:member>
                    <MemberCard member=member page=page />
                </For>
            </div>
            <Pagination list=list empty_message="No team members match." />

            <Show when=move || page.editor.with(|e| e.is_open())>
                <MemberEditor page=page />
            </Show>
            <Show when=move || page.deleting.with(|d| d.is_open())>
                <ConfirmDeleteModal
                    subject=Signal::derive(move || page.deleting.with(|d| {
                        d.target().map(|m| m.name.clone()).unwrap_or_default()
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
fn MemberCard(member: TeamMember, page: ResourcePage<TeamMember>) -> impl IntoView {
    let to_edit = member.clone();
    let to_delete = member.clone();
    let initial = member.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    view! {
        <article class="member-card">
            {match member.photo {
                Some(src) if !src.trim().is_empty() => view! { <img class="member-photo" src=src alt="" /> }.into_any(),
                _ => view! { <div class="member-photo placeholder">{initial}</div> }.into_any(),
            }}
            <h3>{member.name}</h3>
            <p class="member-role">{or_dash(Some(member.role.as_str()))}</p>
            <p class="member-email">{or_dash(Some(member.email.as_str()))}</p>
            <div class="actions">
                <button class="btn btn-small" on:click=move |_| page.open_edit(to_edit.clone())>"Edit"</button>
                <button class="btn btn-small btn-danger" on:click=move |_| page.ask_delete(to_delete.clone())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}

#[component]
fn MemberEditor(page: ResourcePage<TeamMember>) -> impl IntoView {
    let form = page.form;
    let (name, set_name) = field(form, |f: &TeamMemberForm| &f.name, |f: &mut TeamMemberForm| &mut f.name);
    let (role, set_role) = field(form, |f: &TeamMemberForm| &f.role, |f: &mut TeamMemberForm| &mut f.role);
    let (email, set_email) = field(form, |f: &TeamMemberForm| &f.email, |f: &mut TeamMemberForm| &mut f.email);
    let (photo, set_photo) = field(form, |f: &TeamMemberForm| &f.photo, |f: &mut TeamMemberForm| &mut f.photo);

    let title = Signal::derive(move || {
        let title = if page.is_editing() { "Edit team member" } else { "Add team member" };
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
            <TextField label="Role" value=role on_input=set_role required=true />
            <TextField label="Email" input_type="email" value=email on_input=set_email />
            <TextField label="Photo URL" input_type="url" value=photo on_input=set_photo />
        </FormModal>
    }
}
