pub mod error_banner;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod news_card;
pub mod news_form;
pub mod page_hero;
pub mod pagination;
