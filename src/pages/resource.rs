//! Resource Page State
//!
//! Everything an admin list page owns: the loaded rows with their
//! search/filter/page view, the add/edit dialog, the delete confirmation and
//! the detail dialog. Pages only supply columns and form fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_view, DetailState, ListView, ModalState};

use crate::api::{resources, RecordForm, Resource};
use crate::context::{use_app, AppContext};
use crate::store::NoticeKind;

/// Editor target: `None` adds, `Some` edits that record
pub type EditorState<R> = ModalState<Option<R>>;

pub struct ResourcePage<R: Resource> {
    pub list: ListView<R>,
    pub loading: RwSignal<bool>,
    pub editor: RwSignal<EditorState<R>>,
    pub form: RwSignal<R::Form>,
    pub form_error: RwSignal<Option<String>>,
    pub deleting: RwSignal<ModalState<R>>,
    pub detail: RwSignal<ModalState<DetailState<R>>>,
    /// A create/update/delete is in flight
    pub pending: RwSignal<bool>,
    ctx: AppContext,
}

impl<R: Resource> Clone for ResourcePage<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourcePage<R> {}

/// Create the page state and start loading the collection
pub fn use_resource_page<R: Resource>(page_size: usize) -> ResourcePage<R> {
    let page = ResourcePage {
        list: create_list_view(page_size),
        loading: RwSignal::new(false),
        editor: RwSignal::new(ModalState::Closed),
        form: RwSignal::new(R::Form::default()),
        form_error: RwSignal::new(None),
        deleting: RwSignal::new(ModalState::Closed),
        detail: RwSignal::new(ModalState::Closed),
        pending: RwSignal::new(false),
        ctx: use_app(),
    };
    page.reload();
    page
}

impl<R: Resource> ResourcePage<R> {
    /// Fetch the whole collection again
    pub fn reload(&self) {
        let page = *self;
        page.loading.set(true);
        spawn_local(async move {
            let result = resources::list::<R>(&page.ctx.api()).await;
            // the page may have been left while the request was out
            if page.list.items.is_disposed() {
                return;
            }
            match result {
                Ok(rows) => page.list.set_items(rows),
                Err(e) => page.ctx.report(&format!("load {} list", R::NOUN), &e),
            }
            page.loading.set(false);
        });
    }

    // ========================
    // Add / Edit
    // ========================

    pub fn open_add(&self) {
        self.form.set(R::Form::default());
        self.form_error.set(None);
        self.editor.set(ModalState::Open(None));
    }

    pub fn open_edit(&self, record: R) {
        self.form.set(R::Form::from_record(&record));
        self.form_error.set(None);
        self.editor.set(ModalState::Open(Some(record)));
    }

    pub fn close_editor(&self) {
        self.editor.update(ModalState::close);
        self.form_error.set(None);
    }

    pub fn is_editing(&self) -> bool {
        self.editor.with(|e| matches!(e, ModalState::Open(Some(_))))
    }

    /// Validate, then POST or PUT. Closes the dialog and re-fetches on success.
    pub fn submit(&self) {
        if self.pending.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(message) = form.validate() {
            self.form_error.set(Some(message));
            return;
        }
        let target_id = self
            .editor
            .with_untracked(|e| e.target().and_then(|t| t.as_ref()).map(|r| r.id().to_string()));

        let page = *self;
        page.pending.set(true);
        page.form_error.set(None);
        spawn_local(async move {
            let api = page.ctx.api();
            let result = match &target_id {
                Some(id) => resources::update::<R>(&api, id, &form).await,
                None => resources::create::<R>(&api, &form).await,
            };
            page.pending.set(false);
            match result {
                Ok(_) => {
                    let verb = if target_id.is_some() { "updated" } else { "created" };
                    log::info!("[ui] {} {}", R::NOUN, verb);
                    page.ctx.notify(NoticeKind::Info, format!("{} {}", capitalize(R::NOUN), verb));
                    page.close_editor();
                    page.reload();
                }
                Err(e) => {
                    page.form_error.set(Some(e.to_string()));
                    page.ctx.report(&format!("save {}", R::NOUN), &e);
                }
            }
        });
    }

    // ========================
    // Delete
    // ========================

    pub fn ask_delete(&self, record: R) {
        self.deleting.set(ModalState::Open(record));
    }

    pub fn cancel_delete(&self) {
        self.deleting.update(ModalState::close);
    }

    /// DELETE the confirmed record and drop it from the loaded rows
    pub fn confirm_delete(&self) {
        if self.pending.get_untracked() {
            return;
        }
        let Some(id) = self.deleting.with_untracked(|d| d.target().map(|r| r.id().to_string())) else {
            return;
        };

        let page = *self;
        page.pending.set(true);
        spawn_local(async move {
            let result = resources::delete::<R>(&page.ctx.api(), &id).await;
            page.pending.set(false);
            match result {
                Ok(()) => {
                    if !page.list.items.is_disposed() {
                        page.list.remove(&id);
                    }
                    page.cancel_delete();
                    page.ctx.notify(NoticeKind::Info, format!("{} deleted", capitalize(R::NOUN)));
                }
                Err(e) => {
                    page.cancel_delete();
                    page.ctx.report(&format!("delete {}", R::NOUN), &e);
                }
            }
        });
    }

    // ========================
    // Detail
    // ========================

    /// Open the detail dialog and fetch the record on its own
    pub fn open_detail(&self, id: String) {
        let page = *self;
        page.detail.set(ModalState::Open(DetailState::Loading));
        spawn_local(async move {
            let result = resources::get::<R>(&page.ctx.api(), &id).await;
            if let Err(e) = &result {
                page.ctx.report(&format!("load {}", R::NOUN), e);
            }
            // closed before the answer came back
            if page.detail.try_with_untracked(ModalState::is_open) != Some(true) {
                return;
            }
            page.detail.set(ModalState::Open(DetailState::from_lookup(result)));
        });
    }

    pub fn close_detail(&self) {
        self.detail.update(ModalState::close);
    }
}

/// `For` key of a table row. The whole record, so a row edited on the
/// server renders again after a reload.
pub fn row_key<R: Resource>(record: &R) -> R {
    record.clone()
}

/// Body of a detail dialog: nothing while loading, a message when missing
/// or failed, `render` once the record is there
pub fn detail_body<R: Resource>(state: &DetailState<R>, render: impl FnOnce(&R) -> AnyView) -> AnyView {
    match state {
        DetailState::Loading => ().into_any(),
        DetailState::Ready(record) => render(record),
        DetailState::Missing => view! {
            <p class="empty-state">{format!("This {} no longer exists.", R::NOUN)}</p>
        }
        .into_any(),
        DetailState::Failed(message) => view! { <p class="form-error-banner">{message.clone()}</p> }.into_any(),
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
