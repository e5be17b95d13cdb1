use intl_office_shared::{
    form::{news_form_config, Feedback, FormController, Mode},
    NewsArticle,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{
    api::AdminNewsApi,
    components::{error_banner::ErrorBanner, news_form::NewsForm},
    hooks::use_scroll_to_top,
    router::Route,
    utils::today_ymd,
};

#[derive(Properties, PartialEq)]
pub struct NewsFormPageProps {
    /// Present when editing an existing article, absent for a new draft.
    #[prop_or_default]
    pub id: Option<String>,
}

/// Create/edit page for one news article. Owns a [`FormController`] for the
/// session and mirrors its draft into component state for rendering.
#[function_component(NewsFormPage)]
pub fn news_form_page(props: &NewsFormPageProps) -> Html {
    use_scroll_to_top();

    let navigator = use_navigator();
    let mode = match &props.id {
        Some(id) => Mode::Edit(id.clone()),
        None => Mode::Create,
    };

    let controller = {
        let mode = mode.clone();
        use_mut_ref(move || {
            FormController::new(news_form_config(today_ymd()), AdminNewsApi, mode)
        })
    };

    let draft = use_state(|| controller.borrow().draft().clone());
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Seed the form once per id: defaults in create mode, fetched record in
    // edit mode.
    {
        let controller = controller.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |_| {
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let feedback = { controller.borrow_mut().load().await };
                draft.set(controller.borrow().draft().clone());
                busy.set(false);
                if let Some(Feedback::Error(message)) = feedback {
                    error.set(Some(message));
                }
            });
            || ()
        });
    }

    let on_change = {
        let controller = controller.clone();
        let draft = draft.clone();
        Callback::from(move |next: NewsArticle| {
            controller.borrow_mut().set_draft(next.clone());
            draft.set(next);
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let controller = controller.clone();
            let draft = draft.clone();
            let busy = busy.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let feedback = { controller.borrow_mut().submit().await };
                busy.set(false);
                match feedback {
                    Feedback::Success(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::AdminNews);
                        }
                    },
                    Feedback::Error(message) => {
                        // The controller kept the draft; re-mirror it so the
                        // operator can retry without losing edits.
                        draft.set(controller.borrow().draft().clone());
                        error.set(Some(message));
                    },
                }
            });
        })
    };

    let on_error_close = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    let (title, submit_label) = match mode {
        Mode::Create => ("New news article", "Create article"),
        Mode::Edit(_) => ("Edit news article", "Save changes"),
    };

    html! {
        <main class="main admin-page">
            <div class="container">
                <nav class="admin-breadcrumb">
                    <Link<Route> to={Route::AdminNews} classes={classes!("admin-back-link")}>
                        { "← News management" }
                    </Link<Route>>
                </nav>
                <h1 class="page-title">{ title }</h1>

                {
                    if let Some(message) = (*error).clone() {
                        html! { <ErrorBanner message={message} on_close={on_error_close} /> }
                    } else {
                        Html::default()
                    }
                }

                <NewsForm
                    draft={(*draft).clone()}
                    on_change={on_change}
                    on_submit={on_submit}
                    busy={*busy}
                    submit_label={submit_label}
                />
            </div>
        </main>
    }
}
