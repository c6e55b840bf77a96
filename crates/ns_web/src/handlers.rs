use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use ns_core::NewsReport;
use crate::{error::ApiError, AppState};

const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Result<Json<NewsReport>, ApiError> {
    news_report(&state, &company).await
}

/// `/news/` with nothing after the slash searches for the empty string.
pub async fn get_news_empty(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NewsReport>, ApiError> {
    news_report(&state, "").await
}

async fn news_report(state: &AppState, company: &str) -> Result<Json<NewsReport>, ApiError> {
    tracing::info!("📥 News requested for '{}'", company);
    let report = state.fetcher.fetch_report(company).await?;
    Ok(Json(report))
}

pub async fn get_tts(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let audio = state.audio.load(&company).await?;
    let headers = [
        (header::CONTENT_TYPE, "audio/mpeg".to_string()),
        (header::CONTENT_LENGTH, audio.bytes.len().to_string()),
        (header::LAST_MODIFIED, audio.modified.format(HTTP_DATE).to_string()),
    ];
    Ok((headers, audio.bytes))
}
