//! Common transport-layer types for the report API.
//! These structs are what the HTTP handlers serialize; the `converters`
//! module builds them from the constant datasets in `model`.

pub mod converters;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    ErrorMetricsResponse = ApiResponse<Vec<ErrorMetricDto>>,
    DemandEstimatesResponse = ApiResponse<Vec<DemandEstimateDto>>,
    SelectionResponse = ApiResponse<SelectionDto>,
    ReportElementsResponse = ApiResponse<Vec<ReportElementDto>>
)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Error metrics =====================

/// One row of the model comparison table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorMetricDto {
    /// Model name
    #[schema(example = "Exponential Smoothing")]
    pub model: String,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean absolute percentage error, in percent
    pub mape_percent: f64,
    /// Root mean squared percentage error, in percent
    pub rmspe_percent: f64,
}

// ===================== Demand estimates =====================

/// Estimated consumption for one month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DemandEstimateDto {
    /// First day of the month (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Consumption in trillion watts
    pub consumption_twh: f64,
}

// ===================== Selection =====================

/// The selected model and the reason it was chosen.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SelectionDto {
    pub selected_model: String,
    pub reason: String,
}

// ===================== Render trace =====================

/// Kind of element emitted to the page during a render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportElementKind {
    PageConfig,
    Title,
    Header,
    Markdown,
    Table,
    Image,
    Warning,
    Figure,
}

/// A single element of the rendered page, in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReportElementDto {
    pub kind: ReportElementKind,
    /// Short human-readable description of the element
    pub summary: String,
}
