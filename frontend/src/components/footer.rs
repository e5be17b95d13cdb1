use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p class="footer-copy">
                    { "International Office · University Relations" }
                </p>
                <nav class="footer-nav" aria-label="Footer">
                    <Link<Route> to={Route::Resources} classes={classes!("footer-link")}>
                        { "Resources" }
                    </Link<Route>>
                    <Link<Route> to={Route::News} classes={classes!("footer-link")}>
                        { "News" }
                    </Link<Route>>
                    <Link<Route> to={Route::AdminNews} classes={classes!("footer-link")}>
                        { "Staff login" }
                    </Link<Route>>
                </nav>
            </div>
        </footer>
    }
}
