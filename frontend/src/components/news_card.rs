use intl_office_shared::NewsListItem;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{router::Route, utils::display_date};

#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub item: NewsListItem,
}

#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let item = &props.item;

    html! {
        <Link<Route>
            to={Route::NewsDetail { id: item.id.clone() }}
            classes={classes!("news-card")}
        >
            {
                if item.image_url.is_empty() {
                    Html::default()
                } else {
                    html! {
                        <img
                            class="news-card-image"
                            src={item.image_url.clone()}
                            alt=""
                            loading="lazy"
                        />
                    }
                }
            }
            <div class="news-card-body">
                <div class="news-card-meta">
                    <span class="news-card-category">{ &item.category }</span>
                    <time class="news-card-date">{ display_date(&item.date) }</time>
                    {
                        if item.is_featured {
                            html! { <span class="news-card-featured">{ "Featured" }</span> }
                        } else {
                            Html::default()
                        }
                    }
                </div>
                <h3 class="news-card-title">{ &item.title }</h3>
                <p class="news-card-summary">{ &item.summary }</p>
            </div>
        </Link<Route>>
    }
}
