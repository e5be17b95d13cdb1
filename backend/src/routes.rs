use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/news", get(handlers::list_news).post(handlers::create_news))
        .route(
            "/api/news/:id",
            get(handlers::get_news)
                .put(handlers::update_news)
                .delete(handlers::delete_news),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
