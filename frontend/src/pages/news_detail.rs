use intl_office_shared::NewsArticle;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_news_item,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_scroll_to_top,
    router::Route,
    utils::display_date,
};

#[derive(Properties, PartialEq)]
pub struct NewsDetailPageProps {
    pub id: String,
}

#[function_component(NewsDetailPage)]
pub fn news_detail_page(props: &NewsDetailPageProps) -> Html {
    use_scroll_to_top();

    let article = use_state(|| None::<NewsArticle>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let not_found = use_state(|| false);

    {
        let article = article.clone();
        let loading = loading.clone();
        let error = error.clone();
        let not_found = not_found.clone();
        use_effect_with(props.id.clone(), move |id: &String| {
            let id = id.clone();
            loading.set(true);
            not_found.set(false);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_news_item(&id).await {
                    Ok(Some(record)) => {
                        article.set(Some(record));
                        error.set(None);
                    },
                    Ok(None) => not_found.set(true),
                    Err(err) => {
                        error.set(Some(format!("Failed to load the article: {err}")));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if *not_found {
        html! {
            <div class="news-missing">
                <h1 class="page-title">{ "Article not found" }</h1>
                <p>{ "This article may have been removed or unpublished." }</p>
                <Link<Route> to={Route::News} classes={classes!("button-secondary")}>
                    { "Back to news" }
                </Link<Route>>
            </div>
        }
    } else if let Some(article) = (*article).clone() {
        html! {
            <article class="news-article">
                <div class="news-article-meta">
                    <span class="news-card-category">{ &article.category }</span>
                    <time class="news-card-date">{ display_date(&article.date) }</time>
                </div>
                <h1 class="page-title">{ &article.title }</h1>
                {
                    if article.image_url.is_empty() {
                        Html::default()
                    } else {
                        html! {
                            <img
                                class="news-article-image"
                                src={article.image_url.clone()}
                                alt=""
                            />
                        }
                    }
                }
                <p class="news-article-summary">{ &article.summary }</p>
                <div class="news-article-content">
                    { for article.content.split("\n\n").map(|paragraph| html! {
                        <p>{ paragraph }</p>
                    }) }
                </div>
            </article>
        }
    } else {
        Html::default()
    };

    html! {
        <main class="main news-detail-page">
            <div class="container">
                {
                    if let Some(message) = (*error).clone() {
                        html! { <ErrorBanner message={message} /> }
                    } else {
                        Html::default()
                    }
                }
                { body }
            </div>
        </main>
    }
}
