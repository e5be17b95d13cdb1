use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub kicker: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

/// Shared page-top section for the informational pages.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <p class="page-kicker">{ props.kicker.clone() }</p>
            <h1 class="page-title">{ props.title.clone() }</h1>
            {
                match &props.description {
                    Some(description) => html! {
                        <p class="page-description">{ description.clone() }</p>
                    },
                    None => Html::default(),
                }
            }
        </section>
    }
}
