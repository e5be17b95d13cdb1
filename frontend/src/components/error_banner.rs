use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    html! {
        <div class="error-banner" role="alert" aria-live="assertive">
            <span class="error-banner-icon" aria-hidden="true">{"⚠"}</span>
            <div class="error-banner-body">
                <p class="error-banner-title">{ "Something went wrong" }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="error-banner-close"
                aria-label="Dismiss error"
                onclick={dismiss}
            >
                {"×"}
            </button>
        </div>
    }
}
