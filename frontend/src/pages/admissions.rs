use yew::prelude::*;

use crate::{components::page_hero::PageHero, hooks::use_scroll_to_top};

const APPLICATION_STEPS: &[(&str, &str)] = &[
    ("Choose a program", "Check the program catalogue and entry requirements."),
    ("Prepare documents", "Transcripts, language certificate, passport copy, and motivation letter."),
    ("Apply online", "Submit the application through the admissions portal before the deadline."),
    ("Admission decision", "Decisions are sent by e-mail within six weeks of the deadline."),
    ("Visa and arrival", "Accepted students receive visa support documents and arrival guidance."),
];

const DEADLINES: &[(&str, &str, &str)] = &[
    ("Fall intake", "Non-EU applicants", "April 30"),
    ("Fall intake", "EU applicants", "June 30"),
    ("Spring intake", "Non-EU applicants", "October 31"),
    ("Spring intake", "EU applicants", "November 30"),
];

#[function_component(AdmissionsPage)]
pub fn admissions_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="main admissions-page">
            <div class="container">
                <PageHero
                    kicker="Admissions"
                    title="How to apply"
                    description="The application process for international degree-seeking students."
                />

                <section class="steps" aria-label="Application steps">
                    <ol class="steps-list">
                        { for APPLICATION_STEPS.iter().map(|(title, detail)| html! {
                            <li class="steps-item">
                                <h2 class="steps-title">{ *title }</h2>
                                <p class="steps-detail">{ *detail }</p>
                            </li>
                        }) }
                    </ol>
                </section>

                <section class="deadlines" aria-label="Application deadlines">
                    <h2 class="section-title">{ "Deadlines" }</h2>
                    <table class="info-table">
                        <thead>
                            <tr>
                                <th>{ "Intake" }</th>
                                <th>{ "Applicant group" }</th>
                                <th>{ "Deadline" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for DEADLINES.iter().map(|(intake, group, deadline)| html! {
                                <tr>
                                    <td>{ *intake }</td>
                                    <td>{ *group }</td>
                                    <td>{ *deadline }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </section>
            </div>
        </main>
    }
}
