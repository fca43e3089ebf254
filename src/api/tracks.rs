use std::sync::Arc;

use axum::{
    Extension,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::{
    audius::Catalog,
    mood::DEFAULT_MOOD,
    radio,
    types::{ErrorResponse, TracksResponse},
    utils, warning,
};

#[derive(Debug, Default, Deserialize)]
pub struct TracksQuery {
    pub mood: Option<String>,
    pub count: Option<String>,
}

pub async fn tracks(
    query: Result<Query<TracksQuery>, QueryRejection>,
    Extension(catalog): Extension<Arc<dyn Catalog>>,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return failure(rejection.body_text()),
    };

    // echoed back as given, even when the lookup falls back to chill
    let mood = params.mood.unwrap_or_else(|| DEFAULT_MOOD.to_string());
    let count = utils::parse_count(params.count.as_deref());

    match radio::mix(catalog.as_ref(), &mood, count).await {
        Ok(tracks) => Json(TracksResponse {
            success: true,
            mood,
            count: tracks.len(),
            tracks,
        })
        .into_response(),
        Err(e) => failure(e.to_string()),
    }
}

fn failure(error: String) -> Response {
    warning!("Audius API error: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

/// Answers CORS preflight requests without touching the catalog.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
