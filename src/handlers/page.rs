use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json},
};
use common::ReportElementsResponse;
use report::{ForecastImage, ReportError, load_forecast_image, render_elements, render_html_page};
use tracing::{debug, error, info, instrument, trace};

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn render_failure(e: ReportError) -> HandlerError {
    error!("Failed to render report: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("RENDER_FAILED", e.to_string())),
    )
}

fn task_failure(e: tokio::task::JoinError) -> HandlerError {
    error!("Render task failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("RENDER_TASK_FAILED", "Render task did not complete")),
    )
}

/// Render the full report page
#[utoipa::path(
    get,
    path = "/",
    tag = "report",
    responses(
        (status = 200, description = "Rendered HTML report", content_type = "text/html", body = String),
        (status = 500, description = "Report could not be rendered", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn report_page(State(state): State<AppState>) -> Result<Html<String>, HandlerError> {
    trace!("Entering report_page function");
    let renderer = state.renderer.clone();

    // The render reads the forecast image from disk
    let (page, outcome) = tokio::task::spawn_blocking(move || render_html_page(&renderer))
        .await
        .map_err(task_failure)?
        .map_err(render_failure)?;

    info!(?outcome, "Report page rendered");
    Ok(Html(page.into_string()))
}

/// List the elements emitted by a render, in order
#[utoipa::path(
    get,
    path = "/api/v1/report/elements",
    tag = "report",
    responses(
        (status = 200, description = "Rendered elements retrieved successfully", body = ReportElementsResponse),
        (status = 500, description = "Report could not be rendered", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn report_elements(
    State(state): State<AppState>,
) -> Result<Json<ReportElementsResponse>, HandlerError> {
    let renderer = state.renderer.clone();
    let elements = tokio::task::spawn_blocking(move || render_elements(&renderer))
        .await
        .map_err(task_failure)?
        .map_err(render_failure)?;

    debug!("Rendered {} elements", elements.len());
    let response = ApiResponse {
        data: elements,
        message: "Report elements retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Serve the raw forecast plot
#[utoipa::path(
    get,
    path = "/api/v1/report/forecast-image",
    tag = "report",
    responses(
        (status = 200, description = "Forecast plot", content_type = "image/png", body = Vec<u8>),
        (status = 404, description = "Forecast plot has not been generated", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn forecast_image(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HandlerError> {
    let path = state.renderer.image_path().to_path_buf();
    let image = tokio::task::spawn_blocking(move || load_forecast_image(&path))
        .await
        .map_err(task_failure)?;

    match image {
        ForecastImage::Loaded(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes)),
        ForecastImage::Missing(reason) => {
            debug!("Forecast image unavailable: {}", reason.message);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(
                    "FORECAST_IMAGE_MISSING",
                    format!(
                        "Forecast plot image '{}' not found",
                        state.renderer.image_path().display()
                    ),
                )),
            ))
        }
    }
}
