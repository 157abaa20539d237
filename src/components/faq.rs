//! FAQ accordion. At most one entry is open at a time.

use leptos::prelude::*;

use crate::content::FaqEntry;

/// Open entry after clicking `clicked`
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn FaqAccordion(entries: &'static [FaqEntry]) -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section class="faq" id="faq">
            <h2>"Frequently asked questions"</h2>
            {entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let is_open = move || open.get() == Some(i);
                    view! {
                        <div class="faq-item" class:open=is_open>
                            <button
                                class="faq-question"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| open.update(|o| *o = toggle(*o, i))
                            >
                                {entry.question}
                            </button>
                            <Show when=is_open>
                                <p class="faq-answer">{entry.answer}</p>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
