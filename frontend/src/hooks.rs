use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Paginate arbitrary vectors inside a component. Returns the visible slice,
/// the clamped current page, the total page count, and a go-to-page callback.
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = total_pages_for(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let safe_page = clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let visible_slice = {
        let page_snapshot = *current_page;
        use_memo((items, page_snapshot, per_page), move |(items, page, per_page)| {
            if items.is_empty() {
                return Vec::new();
            }
            let total = total_pages_for(items.len(), *per_page);
            let safe_page = clamp_page(*page, total);
            let start = (*per_page).saturating_mul(safe_page - 1);
            let end = usize::min(start + *per_page, items.len());
            items[start..end].to_vec()
        })
    };

    let visible_items = (*visible_slice).clone();
    let visible_page = clamp_page(*current_page, total_pages);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let next_page = clamp_page(page, total_pages);
            if next_page != *current_page {
                current_page.set(next_page);
            }
        })
    };

    (visible_items, visible_page, total_pages, go_to_page)
}

/// Scroll the viewport back to the top whenever the route changes. Called by
/// top-level pages so navigation always starts at the page head.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }
        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages)
}

fn total_pages_for(len: usize, per_page: usize) -> usize {
    if len == 0 {
        1
    } else {
        usize::max(len.div_ceil(per_page), 1)
    }
}
