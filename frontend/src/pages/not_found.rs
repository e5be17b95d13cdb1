use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="main not-found-page">
            <div class="container">
                <h1 class="page-title">{ "Page not found" }</h1>
                <p>{ "The page you were looking for does not exist." }</p>
                <Link<Route> to={Route::Home} classes={classes!("button-secondary")}>
                    { "Back to the home page" }
                </Link<Route>>
            </div>
        </main>
    }
}
