use axum::response::Json;
use common::{DemandEstimatesResponse, ErrorMetricsResponse, SelectionResponse, converters};
use tracing::{debug, instrument};

use crate::schemas::ApiResponse;

/// Get the error metrics of every evaluated model
#[utoipa::path(
    get,
    path = "/api/v1/report/error-metrics",
    tag = "results",
    responses(
        (status = 200, description = "Error metrics retrieved successfully", body = ErrorMetricsResponse)
    )
)]
#[instrument]
pub async fn get_error_metrics() -> Json<ErrorMetricsResponse> {
    let metrics = converters::error_metrics();
    debug!("Returning {} error metric rows", metrics.len());

    Json(ApiResponse {
        data: metrics,
        message: "Error metrics retrieved successfully".to_string(),
        success: true,
    })
}

/// Get the monthly demand estimates of the selected model
#[utoipa::path(
    get,
    path = "/api/v1/report/demand-estimates",
    tag = "results",
    responses(
        (status = 200, description = "Demand estimates retrieved successfully", body = DemandEstimatesResponse)
    )
)]
#[instrument]
pub async fn get_demand_estimates() -> Json<DemandEstimatesResponse> {
    let estimates = converters::demand_estimates();
    debug!("Returning {} demand estimates", estimates.len());

    Json(ApiResponse {
        data: estimates,
        message: "Demand estimates retrieved successfully".to_string(),
        success: true,
    })
}

/// Get the selected model and the reason for selecting it
#[utoipa::path(
    get,
    path = "/api/v1/report/selection",
    tag = "results",
    responses(
        (status = 200, description = "Model selection retrieved successfully", body = SelectionResponse)
    )
)]
#[instrument]
pub async fn get_selection() -> Json<SelectionResponse> {
    Json(ApiResponse {
        data: converters::selection(),
        message: "Model selection retrieved successfully".to_string(),
        success: true,
    })
}
