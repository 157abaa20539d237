// =============================================================================
// Form Fields
// =============================================================================
// 1. TextField
// 2. SelectField
// 3. FileField
// =============================================================================

use leptos::prelude::*;
use wasm_bindgen::JsCast;

// -----------------------------------------------------------------------------
// 1. TextField
// -----------------------------------------------------------------------------

/// Labelled text input, or a textarea when `multiline`
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    let control = if multiline {
        view! {
            <textarea
                class="form-textarea"
                rows=6
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            {control}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. SelectField
// -----------------------------------------------------------------------------

/// Dropdown over `(value, label)` pairs. The empty value stands for "none".
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] empty_label: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let empty_label = if empty_label.is_empty() { "None".to_string() } else { empty_label };

    view! {
        <div class="form-field">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <select
                class="form-select"
                prop:value=move || value.get()
                on:change=move |e| on_change.run(event_target_value(&e))
            >
                <option value="">{empty_label}</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option, text)| {
                            let is_selected = option == selected;
                            view! { <option value=option selected=is_selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. FileField
// -----------------------------------------------------------------------------

/// File picker handing the chosen file (if any) to `on_pick`
#[component]
pub fn FileField(
    #[prop(into)] label: String,
    #[prop(into)] on_pick: Callback<Option<web_sys::File>>,
    #[prop(optional, into)] accept: String,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type="file"
                class="form-file"
                accept=accept
                on:change=move |ev| {
                    let file = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0));
                    on_pick.run(file);
                }
            />
        </div>
    }
}
