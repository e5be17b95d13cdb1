use yew::prelude::*;

use crate::{components::page_hero::PageHero, hooks::use_scroll_to_top};

struct Program {
    name: &'static str,
    degree: &'static str,
    duration: &'static str,
    language: &'static str,
    description: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        name: "International Business",
        degree: "BSc",
        duration: "3 years",
        language: "English",
        description: "Management, economics, and a mandatory exchange semester abroad.",
    },
    Program {
        name: "Computer Science",
        degree: "BSc",
        duration: "3 years",
        language: "English",
        description: "Software engineering and data-driven systems with industry projects.",
    },
    Program {
        name: "European Studies",
        degree: "MA",
        duration: "2 years",
        language: "English",
        description: "Politics, law, and culture of the European integration process.",
    },
    Program {
        name: "Biomedical Engineering",
        degree: "MSc",
        duration: "2 years",
        language: "English",
        description: "Medical devices and imaging, taught jointly with the clinical faculty.",
    },
    Program {
        name: "Public Health",
        degree: "MSc",
        duration: "2 years",
        language: "English",
        description: "Epidemiology and health policy with an international placement.",
    },
];

#[function_component(ProgramsPage)]
pub fn programs_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="main programs-page">
            <div class="container">
                <PageHero
                    kicker="Programs"
                    title="English-taught degree programs"
                    description="Programs open to international applicants. Full curricula are published by the faculties."
                />

                <section class="program-grid" aria-label="Degree programs">
                    { for PROGRAMS.iter().map(|program| html! {
                        <article class="program-card">
                            <div class="program-meta">
                                <span class="program-degree">{ program.degree }</span>
                                <span class="program-duration">{ program.duration }</span>
                                <span class="program-language">{ program.language }</span>
                            </div>
                            <h2 class="program-name">{ program.name }</h2>
                            <p class="program-description">{ program.description }</p>
                        </article>
                    }) }
                </section>
            </div>
        </main>
    }
}
