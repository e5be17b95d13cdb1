use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes={classes!("site-brand")}>
                    <span class="brand-mark">{ "IO" }</span>
                    <span class="brand-name">{ "International Office" }</span>
                </Link<Route>>
                <nav class="site-nav" aria-label="Primary">
                    <Link<Route> to={Route::Programs} classes={classes!("nav-link")}>
                        { "Programs" }
                    </Link<Route>>
                    <Link<Route> to={Route::Admissions} classes={classes!("nav-link")}>
                        { "Admissions" }
                    </Link<Route>>
                    <Link<Route> to={Route::StudentMobility} classes={classes!("nav-link")}>
                        { "Student Mobility" }
                    </Link<Route>>
                    <Link<Route> to={Route::FacultyMobility} classes={classes!("nav-link")}>
                        { "Faculty Mobility" }
                    </Link<Route>>
                    <Link<Route> to={Route::Resources} classes={classes!("nav-link")}>
                        { "Resources" }
                    </Link<Route>>
                    <Link<Route> to={Route::News} classes={classes!("nav-link")}>
                        { "News" }
                    </Link<Route>>
                </nav>
            </div>
        </header>
    }
}
