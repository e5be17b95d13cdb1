use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use intl_office_shared::{dates, NewsArticle, NewsListItem, NEWS_CATEGORIES};
use serde::{Deserialize, Serialize};

use crate::{news_store::NewsFilter, state::AppState};

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub include_unpublished: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct NewsListResponse {
    pub articles: Vec<NewsListItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(message: &str, err: anyhow::Error) -> ApiError {
    tracing::error!("{}: {:?}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message.to_string(), code: 500 }),
    )
}

fn not_found(id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse { error: format!("News article not found: {id}"), code: 404 }),
    )
}

fn validation_error(message: String) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse { error: message, code: 422 }),
    )
}

fn validate(article: &NewsArticle) -> Result<(), ApiError> {
    if article.title.trim().is_empty() {
        return Err(validation_error("title must not be empty".to_string()));
    }
    if article.content.trim().is_empty() {
        return Err(validation_error("content must not be empty".to_string()));
    }
    if !NEWS_CATEGORIES.contains(&article.category.as_str()) {
        return Err(validation_error(format!("unknown category: {}", article.category)));
    }
    if dates::date_from_wire(&article.date).is_err() {
        return Err(validation_error(format!("invalid date: {}", article.date)));
    }
    Ok(())
}

pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsListResponse>, ApiError> {
    let filter = NewsFilter {
        category: query.category.filter(|c| !c.trim().is_empty()),
        include_unpublished: query.include_unpublished.unwrap_or(false),
    };
    let articles = state
        .store()
        .list(&filter)
        .map_err(|e| internal_error("Failed to list news articles", e))?;
    let total = articles.len();
    Ok(Json(NewsListResponse { articles, total }))
}

pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NewsArticle>, ApiError> {
    let article = state
        .store()
        .get(&id)
        .map_err(|e| internal_error("Failed to fetch news article", e))?;
    article.map(Json).ok_or_else(|| not_found(&id))
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(article): Json<NewsArticle>,
) -> Result<(StatusCode, Json<NewsArticle>), ApiError> {
    validate(&article)?;
    let stored = state
        .store()
        .insert(&article)
        .map_err(|e| internal_error("Failed to create news article", e))?;
    tracing::info!(id = %stored.id, title = %stored.title, "created news article");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(article): Json<NewsArticle>,
) -> Result<Json<NewsArticle>, ApiError> {
    validate(&article)?;
    let stored = state
        .store()
        .update(&id, &article)
        .map_err(|e| internal_error("Failed to update news article", e))?;
    match stored {
        Some(stored) => {
            tracing::info!(id = %stored.id, "updated news article");
            Ok(Json(stored))
        },
        None => Err(not_found(&id)),
    }
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state
        .store()
        .delete(&id)
        .map_err(|e| internal_error("Failed to delete news article", e))?;
    if !deleted {
        return Err(not_found(&id));
    }
    tracing::info!(id = %id, "deleted news article");
    Ok(Json(DeleteResponse { deleted: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::for_tests()
    }

    fn wire_article(title: &str) -> NewsArticle {
        NewsArticle {
            id: String::new(),
            title: title.to_string(),
            category: "Events".to_string(),
            summary: "summary".to_string(),
            content: "content".to_string(),
            image_url: String::new(),
            is_featured: false,
            date: "2025-01-15T00:00:00.000Z".to_string(),
            is_published: true,
        }
    }

    #[tokio::test]
    async fn create_then_fetch_and_list() {
        let state = test_state();

        let (status, Json(created)) =
            create_news(State(state.clone()), Json(wire_article("Orientation Week")))
                .await
                .expect("create");
        assert_eq!(status, StatusCode::CREATED);
        assert!(!created.id.is_empty());

        let Json(fetched) = get_news(State(state.clone()), Path(created.id.clone()))
            .await
            .expect("get");
        assert_eq!(fetched.title, "Orientation Week");

        let Json(listing) = list_news(
            State(state),
            Query(NewsQuery { category: None, include_unpublished: None }),
        )
        .await
        .expect("list");
        assert_eq!(listing.total, 1);
    }

    #[tokio::test]
    async fn create_rejects_empty_title_with_422() {
        let state = test_state();
        let mut article = wire_article("  ");
        article.title = "   ".to_string();

        let err = create_news(State(state), Json(article)).await.expect_err("must fail");
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.1 .0.code, 422);
    }

    #[tokio::test]
    async fn create_rejects_unknown_category_and_bad_date() {
        let state = test_state();

        let mut article = wire_article("t");
        article.category = "Gossip".to_string();
        let err = create_news(State(state.clone()), Json(article)).await.expect_err("category");
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);

        let mut article = wire_article("t");
        article.date = "soon".to_string();
        let err = create_news(State(state), Json(article)).await.expect_err("date");
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_missing_returns_404_and_delete_round_trips() {
        let state = test_state();

        let err = update_news(
            State(state.clone()),
            Path("missing".to_string()),
            Json(wire_article("t")),
        )
        .await
        .expect_err("404");
        assert_eq!(err.0, StatusCode::NOT_FOUND);

        let (_, Json(created)) =
            create_news(State(state.clone()), Json(wire_article("To delete")))
                .await
                .expect("create");
        let Json(reply) = delete_news(State(state.clone()), Path(created.id.clone()))
            .await
            .expect("delete");
        assert!(reply.deleted);

        let err = get_news(State(state), Path(created.id)).await.expect_err("gone");
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
