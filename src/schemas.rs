use std::sync::Arc;

use common::{
    DemandEstimateDto, DemandEstimatesResponse, ErrorMetricDto, ErrorMetricsResponse,
    ReportElementDto, ReportElementKind, ReportElementsResponse, SelectionDto, SelectionResponse,
};
use report::ReportRenderer;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::config::AppConfig;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Renderer bound to the configured forecast image path
    pub renderer: ReportRenderer,
    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Forecast image status ("available" or "missing")
    pub forecast_image: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::page::report_page,
        crate::handlers::page::report_elements,
        crate::handlers::page::forecast_image,
        crate::handlers::results::get_error_metrics,
        crate::handlers::results::get_demand_estimates,
        crate::handlers::results::get_selection,
    ),
    components(
        schemas(
            ErrorMetricsResponse,
            DemandEstimatesResponse,
            SelectionResponse,
            ReportElementsResponse,
            ErrorResponse,
            HealthResponse,
            ErrorMetricDto,
            DemandEstimateDto,
            SelectionDto,
            ReportElementDto,
            ReportElementKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "report", description = "Rendered report endpoints"),
        (name = "results", description = "Published forecasting results"),
    ),
    info(
        title = "wattcast API",
        description = "Electricity demand forecasting report - model comparison, selected model and monthly demand estimates",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
