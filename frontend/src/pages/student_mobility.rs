use yew::prelude::*;

use crate::{components::page_hero::PageHero, hooks::use_scroll_to_top};

const DESTINATIONS: &[(&str, &str, &str)] = &[
    ("University of Groningen", "Netherlands", "Fall and spring semester"),
    ("Università di Bologna", "Italy", "Full year or single semester"),
    ("Uppsala University", "Sweden", "Fall semester"),
    ("University of Ljubljana", "Slovenia", "Fall and spring semester"),
    ("Kyungpook National University", "South Korea", "Spring semester"),
    ("Universidad de Guadalajara", "Mexico", "Fall semester"),
];

const REQUIREMENTS: &[&str] = &[
    "Completed first year of study at the time of departure",
    "Grade average within the top two thirds of the cohort",
    "Language certificate for the language of instruction (B2 or higher)",
    "Learning agreement approved by the home faculty before departure",
];

#[function_component(StudentMobilityPage)]
pub fn student_mobility_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="main mobility-page">
            <div class="container">
                <PageHero
                    kicker="Student Mobility"
                    title="Exchange semesters abroad"
                    description="Spend a semester or a year at one of our partner universities. Credits transfer through the learning agreement."
                />

                <section aria-label="Partner universities">
                    <h2 class="section-title">{ "Partner universities" }</h2>
                    <table class="info-table">
                        <thead>
                            <tr>
                                <th>{ "University" }</th>
                                <th>{ "Country" }</th>
                                <th>{ "Availability" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for DESTINATIONS.iter().map(|(name, country, terms)| html! {
                                <tr>
                                    <td>{ *name }</td>
                                    <td>{ *country }</td>
                                    <td>{ *terms }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </section>

                <section aria-label="Eligibility">
                    <h2 class="section-title">{ "Eligibility" }</h2>
                    <ul class="check-list">
                        { for REQUIREMENTS.iter().map(|requirement| html! {
                            <li>{ *requirement }</li>
                        }) }
                    </ul>
                </section>
            </div>
        </main>
    }
}
