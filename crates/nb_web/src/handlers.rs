use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use nb_core::{Error, NewsQuery};

use crate::{ui, AppState};

#[derive(Debug, Deserialize)]
pub struct BriefingRequest {
    pub topic: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub async fn index() -> impl IntoResponse {
    Html(ui::INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn create_briefing(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BriefingRequest>,
) -> Response {
    let query = NewsQuery {
        topic: request.topic.trim().to_string(),
        from: request.from,
        to: request.to,
    };

    if query.topic.is_empty() {
        return user_error(StatusCode::BAD_REQUEST, "Please enter a topic to search for.");
    }
    if !query.is_range_valid() {
        return user_error(
            StatusCode::BAD_REQUEST,
            "The start date must not be after the end date.",
        );
    }

    match state.pipeline.run(&query).await {
        Ok(briefing) => (StatusCode::OK, Json(briefing)).into_response(),
        Err(e) => {
            error!("briefing request for '{}' failed: {}", query.topic, e);
            let (status, message) = condense_error(&e);
            user_error(status, &message)
        }
    }
}

fn user_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Map an internal error to a status and a message fit for the page; the
/// full error has already been logged by the time this runs.
fn condense_error(error: &Error) -> (StatusCode, String) {
    match error {
        Error::InvalidQuery(message) => (StatusCode::BAD_REQUEST, message.clone()),
        Error::Fetch {
            status: 401 | 403, ..
        } => (
            StatusCode::BAD_GATEWAY,
            "The news service rejected our credentials. Check the configured API key.".to_string(),
        ),
        Error::Fetch { status, .. } => (
            StatusCode::BAD_GATEWAY,
            format!(
                "The news service returned an error (status {}). Try again in a moment.",
                status
            ),
        ),
        Error::Summarize(_) => (
            StatusCode::BAD_GATEWAY,
            "The summarization service could not produce a summary. Try again in a moment."
                .to_string(),
        ),
        Error::Http(_) => (
            StatusCode::BAD_GATEWAY,
            "Could not reach an upstream service. Check your network connection.".to_string(),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong while preparing the briefing.".to_string(),
        ),
    }
}
