//! Highlight Slider
//!
//! Cycles through slides with previous/next buttons. The index wraps in both
//! directions.

use leptos::prelude::*;

use crate::content::Slide;

/// Index after moving `step` slides from `index`, wrapping around `len`
pub fn wrap_index(index: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + step).rem_euclid(len) as usize
}

#[component]
pub fn Slider(slides: &'static [Slide]) -> impl IntoView {
    let index = RwSignal::new(0usize);
    let len = slides.len();
    let step = move |by: isize| index.update(|i| *i = wrap_index(*i, by, len));

    view! {
        <section class="slider">
            <button class="slider-btn prev" aria-label="Previous" on:click=move |_| step(-1)>"‹"</button>
            {move || slides.get(index.get()).map(|slide| view! {
                <article class="slide">
                    <h3>{slide.title}</h3>
                    <p>{slide.body}</p>
                </article>
            })}
            <button class="slider-btn next" aria-label="Next" on:click=move |_| step(1)>"›"</button>
            <div class="slider-dots">
                {(0..len)
                    .map(|i| view! {
                        <button
                            class="slider-dot"
                            class:active=move || index.get() == i
                            aria-label=format!("Slide {}", i + 1)
                            on:click=move |_| index.set(i)
                        />
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 7, 3), 1);
    }

    #[test]
    fn test_no_slides() {
        assert_eq!(wrap_index(0, 1, 0), 0);
        assert_eq!(wrap_index(0, -1, 0), 0);
    }
}
