use intl_office_shared::{NewsArticle, NEWS_CATEGORIES};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewsFormProps {
    /// Current draft; the form never mutates it in place.
    pub draft: NewsArticle,
    /// Every field edit produces a whole new draft value.
    pub on_change: Callback<NewsArticle>,
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub busy: bool,
    #[prop_or(AttrValue::from("Save article"))]
    pub submit_label: AttrValue,
}

fn edit_text(
    draft: &NewsArticle,
    on_change: &Callback<NewsArticle>,
    apply: fn(&mut NewsArticle, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = draft.clone();
        apply(&mut next, input.value());
        on_change.emit(next);
    })
}

fn edit_textarea(
    draft: &NewsArticle,
    on_change: &Callback<NewsArticle>,
    apply: fn(&mut NewsArticle, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = draft.clone();
        apply(&mut next, area.value());
        on_change.emit(next);
    })
}

fn edit_flag(
    draft: &NewsArticle,
    on_change: &Callback<NewsArticle>,
    apply: fn(&mut NewsArticle, bool),
) -> Callback<Event> {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = draft.clone();
        apply(&mut next, input.checked());
        on_change.emit(next);
    })
}

/// Data-entry form for one news article. Pure presentation: reports changes
/// upward and never talks to the API itself.
#[function_component(NewsForm)]
pub fn news_form(props: &NewsFormProps) -> Html {
    let draft = &props.draft;
    let on_change = &props.on_change;

    let on_title = edit_text(draft, on_change, |d, v| d.title = v);
    let on_summary = edit_textarea(draft, on_change, |d, v| d.summary = v);
    let on_content = edit_textarea(draft, on_change, |d, v| d.content = v);
    let on_image_url = edit_text(draft, on_change, |d, v| d.image_url = v);
    let on_date = edit_text(draft, on_change, |d, v| d.date = v);
    let on_featured = edit_flag(draft, on_change, |d, v| d.is_featured = v);
    let on_published = edit_flag(draft, on_change, |d, v| d.is_published = v);

    let on_category = {
        let draft = draft.clone();
        let on_change = on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = draft.clone();
            next.category = select.value();
            on_change.emit(next);
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="news-form" onsubmit={onsubmit}>
            <fieldset disabled={props.busy} class="news-form-fields">
                <label class="form-field">
                    <span class="form-label">{ "Title" }</span>
                    <input
                        type="text"
                        value={draft.title.clone()}
                        oninput={on_title}
                        placeholder="Article title"
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{ "Category" }</span>
                    <select onchange={on_category}>
                        <option value="" selected={draft.category.is_empty()}>
                            { "Select a category" }
                        </option>
                        { for NEWS_CATEGORIES.iter().map(|category| html! {
                            <option
                                value={*category}
                                selected={draft.category == *category}
                            >
                                { category }
                            </option>
                        }) }
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-label">{ "Summary" }</span>
                    <textarea
                        rows="3"
                        value={draft.summary.clone()}
                        oninput={on_summary}
                        placeholder="One-paragraph summary shown in lists"
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{ "Content" }</span>
                    <textarea
                        rows="12"
                        value={draft.content.clone()}
                        oninput={on_content}
                        placeholder="Full article text"
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{ "Image URL" }</span>
                    <input
                        type="url"
                        value={draft.image_url.clone()}
                        oninput={on_image_url}
                        placeholder="https://..."
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{ "Date" }</span>
                    <input
                        type="date"
                        value={draft.date.clone()}
                        oninput={on_date}
                    />
                </label>

                <div class="form-flags">
                    <label class="form-flag">
                        <input
                            type="checkbox"
                            checked={draft.is_featured}
                            onchange={on_featured}
                        />
                        <span>{ "Featured on the home page" }</span>
                    </label>
                    <label class="form-flag">
                        <input
                            type="checkbox"
                            checked={draft.is_published}
                            onchange={on_published}
                        />
                        <span>{ "Published" }</span>
                    </label>
                </div>
            </fieldset>

            <div class="form-actions">
                <button type="submit" class="button-primary" disabled={props.busy}>
                    { props.submit_label.clone() }
                </button>
            </div>
        </form>
    }
}
