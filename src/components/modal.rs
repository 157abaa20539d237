//! Modal Components
//!
//! Overlay shell plus the two dialogs every admin list uses: the add/edit
//! form and the delete confirmation.

use leptos::prelude::*;

/// Overlay that closes on backdrop click
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class=format!("modal {}", class)
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <header class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Add/edit dialog. Fields go in `children`; the save button is disabled
/// while a request is outstanding.
#[component]
pub fn FormModal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel class="form-modal">
            <form
                class="record-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                {move || error.get().map(|e| view! { <div class="form-error-banner">{e}</div> })}
                {children()}
                <footer class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                </footer>
            </form>
        </Modal>
    }
}

/// Delete confirmation
#[component]
pub fn ConfirmDeleteModal(
    /// What is being deleted, e.g. `company "Acme"`
    #[prop(into)]
    subject: Signal<String>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Confirm delete".to_string() on_close=on_cancel class="confirm-modal">
            <p class="confirm-text">
                {move || format!("Delete {}? This cannot be undone.", subject.get())}
            </p>
            <footer class="modal-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="btn btn-danger"
                    disabled=move || pending.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    {move || if pending.get() { "Deleting..." } else { "Delete" }}
                </button>
            </footer>
        </Modal>
    }
}
