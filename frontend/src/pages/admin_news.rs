use intl_office_shared::NewsListItem;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::{delete_news_item, fetch_news},
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_scroll_to_top,
    router::Route,
    utils::display_date,
};

/// News management list: every article including unpublished drafts, with
/// edit links and delete buttons.
#[function_component(AdminNewsPage)]
pub fn admin_news_page() -> Html {
    use_scroll_to_top();

    let articles = use_state(Vec::<NewsListItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let articles = articles.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let articles = articles.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_news(None, true).await {
                    Ok(items) => {
                        articles.set(items);
                        error.set(None);
                    },
                    Err(err) => {
                        error.set(Some(format!("Failed to load news articles: {err}")));
                    },
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_delete = {
        let refresh = refresh.clone();
        let error = error.clone();
        Callback::from(move |item: NewsListItem| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("Delete \"{}\"?", item.title))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let refresh = refresh.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_news_item(&item.id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Failed to delete article: {err}"))),
                }
            });
        })
    };

    let on_error_close = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    html! {
        <main class="main admin-page">
            <div class="container">
                <div class="admin-header">
                    <h1 class="page-title">{ "News management" }</h1>
                    <Link<Route> to={Route::AdminNewsNew} classes={classes!("button-primary")}>
                        { "New article" }
                    </Link<Route>>
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
                    } else if articles.is_empty() {
                        html! { <p class="empty-hint">{ "No news articles yet." }</p> }
                    } else {
                        html! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>{ "Title" }</th>
                                        <th>{ "Category" }</th>
                                        <th>{ "Date" }</th>
                                        <th>{ "Status" }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for articles.iter().map(|item| {
                                        let delete = {
                                            let on_delete = on_delete.clone();
                                            let item = item.clone();
                                            Callback::from(move |_| on_delete.emit(item.clone()))
                                        };
                                        html! {
                                            <tr key={item.id.clone()}>
                                                <td class="admin-cell-title">
                                                    { &item.title }
                                                    {
                                                        if item.is_featured {
                                                            html! {
                                                                <span class="badge-featured">
                                                                    { "Featured" }
                                                                </span>
                                                            }
                                                        } else {
                                                            Html::default()
                                                        }
                                                    }
                                                </td>
                                                <td>{ &item.category }</td>
                                                <td>{ display_date(&item.date) }</td>
                                                <td>
                                                    {
                                                        if item.is_published {
                                                            html! {
                                                                <span class="badge-published">
                                                                    { "Published" }
                                                                </span>
                                                            }
                                                        } else {
                                                            html! {
                                                                <span class="badge-draft">
                                                                    { "Draft" }
                                                                </span>
                                                            }
                                                        }
                                                    }
                                                </td>
                                                <td class="admin-cell-actions">
                                                    <Link<Route>
                                                        to={Route::AdminNewsEdit { id: item.id.clone() }}
                                                        classes={classes!("button-secondary")}
                                                    >
                                                        { "Edit" }
                                                    </Link<Route>>
                                                    <button
                                                        type="button"
                                                        class="button-danger"
                                                        onclick={delete}
                                                    >
                                                        { "Delete" }
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        </main>
    }
}
