use yew::prelude::*;

use crate::{components::page_hero::PageHero, hooks::use_scroll_to_top};

const VISIT_TYPES: &[(&str, &str)] = &[
    ("Teaching visits", "Short lecturing stays of 2 to 10 days at a partner university."),
    ("Staff training", "Job shadowing and training weeks for administrative and academic staff."),
    ("Research stays", "Longer visits arranged bilaterally with the host faculty."),
];

#[function_component(FacultyMobilityPage)]
pub fn faculty_mobility_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="main mobility-page">
            <div class="container">
                <PageHero
                    kicker="Faculty Mobility"
                    title="Teaching and training abroad"
                    description="Mobility options for academic and administrative staff under our partnership agreements."
                />

                <section class="visit-types" aria-label="Visit types">
                    { for VISIT_TYPES.iter().map(|(name, detail)| html! {
                        <article class="visit-card">
                            <h2 class="visit-name">{ *name }</h2>
                            <p class="visit-detail">{ *detail }</p>
                        </article>
                    }) }
                </section>

                <section aria-label="How to apply">
                    <h2 class="section-title">{ "How to apply" }</h2>
                    <p>
                        { "Applications are collected twice a year by the international office. \
                           Contact your departmental coordinator for the nomination form and \
                           current funding rates." }
                    </p>
                </section>
            </div>
        </main>
    }
}
