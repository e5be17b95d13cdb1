use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/programs")]
    Programs,

    #[at("/admissions")]
    Admissions,

    #[at("/mobility/students")]
    StudentMobility,

    #[at("/mobility/faculty")]
    FacultyMobility,

    #[at("/resources")]
    Resources,

    #[at("/news")]
    News,

    #[at("/news/:id")]
    NewsDetail { id: String },

    #[at("/admin/news")]
    AdminNews,

    #[at("/admin/news/new")]
    AdminNewsNew,

    #[at("/admin/news/:id/edit")]
    AdminNewsEdit { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Programs => html! { <pages::programs::ProgramsPage /> },
        Route::Admissions => html! { <pages::admissions::AdmissionsPage /> },
        Route::StudentMobility => html! { <pages::student_mobility::StudentMobilityPage /> },
        Route::FacultyMobility => html! { <pages::faculty_mobility::FacultyMobilityPage /> },
        Route::Resources => html! { <pages::resources::ResourcesPage /> },
        Route::News => html! { <pages::news::NewsPage /> },
        Route::NewsDetail { id } => html! { <pages::news_detail::NewsDetailPage id={id} /> },
        Route::AdminNews => html! { <pages::admin_news::AdminNewsPage /> },
        // Keyed so switching between create and edit remounts the form page
        // and its controller.
        Route::AdminNewsNew => html! { <pages::admin_news_form::NewsFormPage key="new" /> },
        Route::AdminNewsEdit { id } => {
            html! { <pages::admin_news_form::NewsFormPage key={id.clone()} id={id.clone()} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Header />
                <div class="app-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
