use intl_office_shared::NewsListItem;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_news,
    components::news_card::NewsCard,
    config::asset_path,
    hooks::use_scroll_to_top,
    router::Route,
};

struct QuickLink {
    title: &'static str,
    description: &'static str,
    route: Route,
}

fn quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink {
            title: "Degree programs",
            description: "English-taught bachelor and master programs open to international applicants.",
            route: Route::Programs,
        },
        QuickLink {
            title: "Admissions",
            description: "Application steps, deadlines, and required documents.",
            route: Route::Admissions,
        },
        QuickLink {
            title: "Student mobility",
            description: "Exchange semesters at partner universities worldwide.",
            route: Route::StudentMobility,
        },
        QuickLink {
            title: "Faculty mobility",
            description: "Teaching and training visits for academic staff.",
            route: Route::FacultyMobility,
        },
    ]
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    let latest = use_state(Vec::<NewsListItem>::new);

    {
        let latest = latest.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Home teaser is best-effort: a failed fetch just leaves the
                // section empty.
                if let Ok(items) = fetch_news(None, false).await {
                    latest.set(items.into_iter().take(3).collect());
                }
            });
            || ()
        });
    }

    html! {
        <main class="main home-page">
            <section class="home-hero">
                <div class="container">
                    <p class="page-kicker">{ "International Office" }</p>
                    <h1 class="home-title">{ "Your gateway to studying with us" }</h1>
                    <p class="home-lead">
                        { "We support international students, visiting faculty, and partner \
                           universities across admissions, mobility programs, and campus life." }
                    </p>
                    <img
                        class="home-hero-image"
                        src={asset_path("static/campus-hero.jpg")}
                        alt="Campus courtyard"
                    />
                </div>
            </section>

            <section class="container quick-links" aria-label="Quick links">
                { for quick_links().into_iter().map(|link| html! {
                    <Link<Route> to={link.route} classes={classes!("quick-link-card")}>
                        <h2 class="quick-link-title">{ link.title }</h2>
                        <p class="quick-link-description">{ link.description }</p>
                    </Link<Route>>
                }) }
            </section>

            {
                if latest.is_empty() {
                    Html::default()
                } else {
                    html! {
                        <section class="container home-news" aria-label="Latest news">
                            <div class="home-news-header">
                                <h2 class="section-title">{ "Latest news" }</h2>
                                <Link<Route> to={Route::News} classes={classes!("section-link")}>
                                    { "All news →" }
                                </Link<Route>>
                            </div>
                            <div class="news-grid">
                                { for latest.iter().map(|item| html! {
                                    <NewsCard key={item.id.clone()} item={item.clone()} />
                                }) }
                            </div>
                        </section>
                    }
                }
            }
        </main>
    }
}
