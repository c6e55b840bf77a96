use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/news/", get(handlers::get_news_empty))
        .route("/news/:company", get(handlers::get_news))
        .route("/tts/:company", get(handlers::get_tts))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use ns_core::{Error, NewsReport, Result};
    pub use crate::{create_app, AppState};
}
