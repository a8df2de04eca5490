//! Request Handlers
//!
//! Maps HTTP requests onto board operations.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;

use crate::board::FeatureBoard;
use crate::error::{FeatureError, Result};
use crate::feature::Feature;
use crate::validate::{CreateFeature, UpdateFeature};

use super::response::DeleteResponse;

/// Shared handler state
pub type AppState = Arc<FeatureBoard>;

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// `GET /api/features`
pub async fn list_features(State(board): State<AppState>) -> Result<Json<Vec<Feature>>> {
    let features = run_blocking(board, |b| b.list()).await?;
    Ok(Json(features))
}

/// `POST /api/features`
///
/// An unreadable body is treated like one without a title.
pub async fn create_feature(
    State(board): State<AppState>,
    payload: std::result::Result<Json<CreateFeature>, JsonRejection>,
) -> Result<(StatusCode, Json<Feature>)> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!("Unreadable create body: {}", rejection);
            CreateFeature::default()
        }
    };

    let feature = run_blocking(board, move |b| b.create(input)).await?;
    Ok((StatusCode::CREATED, Json(feature)))
}

/// `PUT /api/features/:id`
///
/// An unreadable body is treated like an empty one.
pub async fn update_feature(
    State(board): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateFeature>, JsonRejection>,
) -> Result<Json<Feature>> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!("Unreadable update body for {}: {}", id, rejection);
            UpdateFeature::default()
        }
    };

    let feature = run_blocking(board, move |b| b.update(&id, input)).await?;
    Ok(Json(feature))
}

/// `DELETE /api/features/:id`
pub async fn delete_feature(
    State(board): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    run_blocking(board, move |b| b.delete(&id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// Run a board operation on the blocking pool
async fn run_blocking<T, F>(board: AppState, op: F) -> Result<T>
where
    F: FnOnce(&FeatureBoard) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&board))
        .await
        .map_err(|e| FeatureError::Internal(format!("board task failed: {}", e)))?
}
