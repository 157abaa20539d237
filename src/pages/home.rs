//! Public landing page

use leptos::prelude::*;

use crate::components::{FaqAccordion, Hero, OpportunityGrid, SiteFooter, SiteHeader, Slider};
use crate::content::{FAQ, HERO_SUBTITLE, HERO_TITLE, OPPORTUNITIES, SLIDES};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <SiteHeader />
            <Hero
                title=HERO_TITLE
                subtitle=HERO_SUBTITLE
                cta_label="Get started"
                cta_href="/register"
            />
            <Slider slides=SLIDES />
            <OpportunityGrid opportunities=OPPORTUNITIES />
            <section class="mentor-callout" id="mentors">
                <h2>"Learn from people who have done it"</h2>
                <p>"Our mentors work at partner companies and review portfolios, CVs and interview prep."</p>
            </section>
            <FaqAccordion entries=FAQ />
            <SiteFooter />
        </div>
    }
}
