use intl_office_shared::{NewsListItem, NEWS_CATEGORIES};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    api::fetch_news,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        news_card::NewsCard,
        page_hero::PageHero,
        pagination::Pagination,
    },
    hooks::{use_pagination, use_scroll_to_top},
};

const PAGE_SIZE: usize = 9;

/// Public news listing with a category filter.
#[function_component(NewsPage)]
pub fn news_page() -> Html {
    use_scroll_to_top();

    let articles = use_state(Vec::<NewsListItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let category = use_state(String::new);

    {
        let articles = articles.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((*category).clone(), move |category: &String| {
            let selected =
                if category.is_empty() { None } else { Some(category.clone()) };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_news(selected.as_deref(), false).await {
                    Ok(items) => {
                        articles.set(items);
                        error.set(None);
                    },
                    Err(err) => {
                        error.set(Some(format!("Failed to load news: {err}")));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let (visible, current_page, total_pages, go_to_page) =
        use_pagination((*articles).clone(), PAGE_SIZE);

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_error_close = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    html! {
        <main class="main news-page">
            <div class="container">
                <PageHero
                    kicker="News"
                    title="Office news and announcements"
                    description="Updates from the international office: deadlines, events, and partnership announcements."
                />

                <div class="news-filter">
                    <label class="form-field">
                        <span class="form-label">{ "Category" }</span>
                        <select onchange={on_category_change}>
                            <option value="" selected={category.is_empty()}>
                                { "All categories" }
                            </option>
                            { for NEWS_CATEGORIES.iter().map(|name| html! {
                                <option value={*name} selected={*category == *name}>
                                    { name }
                                </option>
                            }) }
                        </select>
                    </label>
                </div>

                {
                    if let Some(message) = (*error).clone() {
                        html! { <ErrorBanner message={message} on_close={on_error_close} /> }
                    } else {
                        Html::default()
                    }
                }

                {
                    if *loading {
                        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
                    } else if visible.is_empty() {
                        html! { <p class="empty-hint">{ "No news in this category yet." }</p> }
                    } else {
                        html! {
                            <>
                                <section class="news-grid" aria-label="News articles">
                                    { for visible.iter().map(|item| html! {
                                        <NewsCard key={item.id.clone()} item={item.clone()} />
                                    }) }
                                </section>
                                <Pagination
                                    current_page={current_page}
                                    total_pages={total_pages}
                                    on_page_change={go_to_page}
                                />
                            </>
                        }
                    }
                }
            </div>
        </main>
    }
}
