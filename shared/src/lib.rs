//! Data model and admin form pipeline shared between the frontend and the
//! backend of the international office site.

pub mod dates;
pub mod form;
pub mod model;

pub use model::{NewsArticle, NewsListItem, NEWS_CATEGORIES};
