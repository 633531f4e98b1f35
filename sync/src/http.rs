//! HTTP endpoints for the sprite index

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error};

use crate::SyncError;
use crate::cache::SpriteCache;

#[derive(Debug, Clone)]
pub struct AppState {
    cache: Arc<SpriteCache>,
    pack: Option<PathBuf>,
}

impl AppState {
    pub fn new(cache: Arc<SpriteCache>, pack: Option<PathBuf>) -> Self {
        Self { cache, pack }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariantsResponse {
    head_id: u32,
    body_id: u32,
    variants: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalResponse {
    total_fusions: usize,
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fusion/variants", get(total_fusions))
        .route("/fusion/variants/{head}/{body}", get(variants))
        .route("/fusion/sprites/{filename}", get(sprite))
        .route("/fusion/pack", get(pack))
        .with_state(state)
}

async fn variants(
    State(state): State<AppState>,
    Path((head, body)): Path<(String, String)>,
) -> Result<Response, SyncError> {
    let (Ok(head_id), Ok(body_id)) = (head.parse::<u32>(), body.parse::<u32>()) else {
        return Ok(bad_request(format!(
            "fusion ids must be numeric, got {head:?} and {body:?}"
        )));
    };

    let index = state.cache.index().await?;
    Ok(Json(VariantsResponse {
        head_id,
        body_id,
        variants: index.variants(head_id, body_id).to_vec(),
    })
    .into_response())
}

async fn total_fusions(State(state): State<AppState>) -> Result<Json<TotalResponse>, SyncError> {
    let index = state.cache.index().await?;
    Ok(Json(TotalResponse {
        total_fusions: index.total_fusions(),
    }))
}

async fn sprite(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, SyncError> {
    if filename.contains(['/', '\\']) || filename.contains("..") {
        debug!(filename = %filename, "rejecting sprite path");
        return Ok(not_found());
    }

    let index = state.cache.index().await?;
    let Some(path) = index.locate(&filename) else {
        return Ok(not_found());
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(not_found()),
        Err(e) => Err(SyncError::io(path, e)),
    }
}

async fn pack(State(state): State<AppState>) -> Result<Response, SyncError> {
    let Some(path) = state.pack.as_ref() else {
        return Ok(not_found());
    };

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(not_found()),
        Err(e) => return Err(SyncError::io(path, e)),
    };
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("pack.zip");

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
