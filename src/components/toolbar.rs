//! List Toolbar
//!
//! Search box, facet filter and the add button above an admin table.

use leptos::prelude::*;
use leptos_listview::{Listable, ListView};

#[component]
pub fn Toolbar<T>(
    list: ListView<T>,
    /// Label of the facet dropdown's "all" option, e.g. "All locations"
    #[prop(into)]
    all_label: String,
    #[prop(optional, into)] placeholder: String,
    /// Shown only when set
    #[prop(optional, into)]
    on_add: Option<Callback<()>>,
    #[prop(optional, into)] add_label: String,
) -> impl IntoView
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    let placeholder = if placeholder.is_empty() { "Search...".to_string() } else { placeholder };
    let add_label = if add_label.is_empty() { "Add".to_string() } else { add_label };

    view! {
        <div class="list-toolbar">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                prop:value=move || list.query.with(|q| q.search.clone())
                on:input=move |e| list.set_search(event_target_value(&e))
            />
            <select
                class="facet-select"
                prop:value=move || list.query.with(|q| q.facet.clone().unwrap_or_default())
                on:change=move |e| {
                    let value = event_target_value(&e);
                    list.set_facet((!value.is_empty()).then_some(value));
                }
            >
                <option value="">{all_label}</option>
                <For
                    each=move || list.facets.get()
                    key=|facet| facet.value.clone()
                    let:facet
                >
                    <option value=facet.value.clone()>{facet.label.clone()}</option>
                </For>
            </select>
            {on_add.map(|on_add| view! {
                <button class="btn btn-primary" on:click=move |_| on_add.run(())>
                    {add_label}
                </button>
            })}
        </div>
    }
}
