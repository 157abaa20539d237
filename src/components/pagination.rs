//! Pagination Controls

use leptos::prelude::*;
use leptos_listview::{Listable, ListView};

/// Page buttons to show for `current` of `total`; `None` is a gap
pub fn page_numbers(current: usize, total: usize) -> Vec<Option<usize>> {
    const EDGE: usize = 1;
    const AROUND: usize = 1;

    let mut numbers = Vec::new();
    let mut last = 0;
    for page in 1..=total {
        let near_edge = page <= EDGE || page + EDGE > total;
        let near_current = page + AROUND >= current && page <= current + AROUND;
        if near_edge || near_current {
            if last + 1 != page {
                numbers.push(None);
            }
            numbers.push(Some(page));
            last = page;
        }
    }
    numbers
}

/// Page controls, or `empty_message` when nothing matches
#[component]
pub fn Pagination<T>(list: ListView<T>, #[prop(into)] empty_message: String) -> impl IntoView
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    let is_empty = move || list.filtered.with(Vec::is_empty);

    view! {
        <Show
            when=move || !is_empty()
            fallback=move || view! { <p class="empty-state">{empty_message.clone()}</p> }
        >
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="page-btn"
                    disabled=move || list.current_page.get() <= 1
                    on:click=move |_| list.prev_page()
                >
                    "‹"
                </button>
                {move || {
                    let current = list.current_page.get();
                    page_numbers(current, list.total_pages.get())
                        .into_iter()
                        .map(|entry| match entry {
                            Some(page) => view! {
                                <button
                                    class="page-btn"
                                    class:active=page == current
                                    on:click=move |_| list.go_to(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            None => view! { <span class="page-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || list.current_page.get() >= list.total_pages.get()
                    on:click=move |_| list.next_page()
                >
                    "›"
                </button>
                <span class="page-summary">
                    {move || format!("{} results", list.filtered.with(Vec::len))}
                </span>
            </nav>
        </Show>
    }
}
