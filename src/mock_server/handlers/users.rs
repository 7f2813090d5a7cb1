//! Profile endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// Query parameters accepted by the profile endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub results: Option<usize>,
    pub seed: Option<String>,
    pub page: Option<i64>,
}

/// GET /api
pub async fn get_users(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<UsersQuery>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.hits += 1;

    match state.envelope(query.seed.as_deref(), query.results, query.page.unwrap_or(1)) {
        Some(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "Unknown seed"
            })),
        )
            .into_response(),
    }
}

/// GET /broken
///
/// Answers 200 with a plain-text body.
pub async fn get_broken() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        "not json",
    )
}
