//! Marketing cards: hero banner and opportunity grid

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::Opportunity;

#[component]
pub fn Hero(
    title: &'static str,
    subtitle: &'static str,
    cta_label: &'static str,
    cta_href: &'static str,
) -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">{title}</h1>
            <p class="hero-subtitle">{subtitle}</p>
            <A href=cta_href attr:class="btn btn-primary hero-cta">{cta_label}</A>
        </section>
    }
}

#[component]
pub fn OpportunityCard(opportunity: &'static Opportunity) -> impl IntoView {
    view! {
        <article class=format!("opportunity-card {}", opportunity.kind.class())>
            <span class="opportunity-kind">{opportunity.kind.label()}</span>
            <h3>{opportunity.title}</h3>
            <p class="opportunity-org">{opportunity.organization}</p>
            <p>{opportunity.summary}</p>
        </article>
    }
}

#[component]
pub fn OpportunityGrid(opportunities: &'static [Opportunity]) -> impl IntoView {
    view! {
        <section class="opportunities" id="opportunities">
            <h2>"Opportunities"</h2>
            <div class="card-grid">
                {opportunities
                    .iter()
                    .map(|opportunity| view! { <OpportunityCard opportunity=opportunity /> })
                    .collect_view()}
            </div>
        </section>
    }
}
