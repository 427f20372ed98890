use super::engine;
use super::types::{ErrorMessage, SearchParams};
use crate::index::WordIndex;

use axum::body::Body;
use axum::extract::{Extension, Query};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `GET /files/search?keyword=<word>`: the list of files containing the
/// keyword, as a JSON array of path strings.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<WordIndex>,
) -> Response {
    if params.keyword.is_empty() {
        tracing::error!("keyword query param is empty");
        return json_response(
            StatusCode::BAD_REQUEST,
            &ErrorMessage::new("no keyword found in request"),
        );
    }

    match engine::search(&index, &params.keyword).await {
        Some(files) => json_response(StatusCode::OK, &files),
        None => {
            tracing::info!(keyword = %params.keyword, "keyword not found in any file");
            json_response(
                StatusCode::NOT_FOUND,
                &ErrorMessage::new("keyword was not found in files"),
            )
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(payload) => write_response(status, payload),
        Err(err) => {
            tracing::error!("error in JSON coding of result: {err}");
            write_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"message":"internal error"}"#.to_vec(),
            )
        }
    }
}

/// Every response carries the same header set, whatever the status.
fn write_response(status: StatusCode, payload: Vec<u8>) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .header(header::CONNECTION, "keep-alive")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(Body::from(payload))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
