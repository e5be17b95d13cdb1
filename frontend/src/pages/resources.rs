use yew::prelude::*;

use crate::{components::page_hero::PageHero, config::asset_path, hooks::use_scroll_to_top};

struct Resource {
    name: &'static str,
    description: &'static str,
    file: &'static str,
}

const RESOURCES: &[Resource] = &[
    Resource {
        name: "Application checklist",
        description: "Every document required for a complete application, by applicant group.",
        file: "static/docs/application-checklist.pdf",
    },
    Resource {
        name: "Learning agreement template",
        description: "Template for exchange students, to be signed before departure.",
        file: "static/docs/learning-agreement.pdf",
    },
    Resource {
        name: "Arrival guide",
        description: "Housing, registration, insurance, and the first weeks on campus.",
        file: "static/docs/arrival-guide.pdf",
    },
    Resource {
        name: "Partner university list",
        description: "All active exchange agreements with available places per year.",
        file: "static/docs/partner-list.pdf",
    },
];

#[function_component(ResourcesPage)]
pub fn resources_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="main resources-page">
            <div class="container">
                <PageHero
                    kicker="Resources"
                    title="Forms and guides"
                    description="Documents referenced throughout the application and mobility process."
                />

                <ul class="resource-list" aria-label="Downloads">
                    { for RESOURCES.iter().map(|resource| html! {
                        <li class="resource-item">
                            <div class="resource-body">
                                <h2 class="resource-name">{ resource.name }</h2>
                                <p class="resource-description">{ resource.description }</p>
                            </div>
                            <a
                                class="button-secondary"
                                href={asset_path(resource.file)}
                                download=""
                            >
                                { "Download" }
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </main>
    }
}
