use axum::{extract::State, http::StatusCode, response::Json};
use report::load_forecast_image;
use tracing::{error, instrument};
use crate::schemas::{AppState, ErrorResponse, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is unhealthy", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    // Same read as the renderer, so the status matches the branch the page takes
    let path = state.renderer.image_path().to_path_buf();
    let image = tokio::task::spawn_blocking(move || load_forecast_image(&path))
        .await
        .map_err(|e| {
            error!("Health check task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    // A missing plot is reported, not treated as unhealthy
    let image_status = if image.is_loaded() {
        "available".to_string()
    } else {
        "missing".to_string()
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        forecast_image: image_status,
    };

    Ok(Json(response))
}
