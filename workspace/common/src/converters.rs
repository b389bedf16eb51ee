//! Converters from the constant datasets in `model` to the transport types.

use model::{DemandEstimateRow, ErrorMetricsRow, SelectionJustification};

use crate::{DemandEstimateDto, ErrorMetricDto, SelectionDto};

impl From<&ErrorMetricsRow> for ErrorMetricDto {
    fn from(row: &ErrorMetricsRow) -> Self {
        ErrorMetricDto {
            model: row.model.name().to_string(),
            rmse: row.rmse,
            mape_percent: row.mape_percent,
            rmspe_percent: row.rmspe_percent,
        }
    }
}

impl From<&DemandEstimateRow> for DemandEstimateDto {
    fn from(row: &DemandEstimateRow) -> Self {
        DemandEstimateDto {
            date: row.date,
            consumption_twh: row.consumption_twh,
        }
    }
}

impl From<&SelectionJustification> for SelectionDto {
    fn from(selection: &SelectionJustification) -> Self {
        SelectionDto {
            selected_model: selection.selected_model_name().to_string(),
            reason: selection.reason_text.to_string(),
        }
    }
}

/// All error metric rows as transport objects, in report order.
pub fn error_metrics() -> Vec<ErrorMetricDto> {
    model::ERROR_METRICS.iter().map(ErrorMetricDto::from).collect()
}

/// All demand estimates as transport objects, oldest first.
pub fn demand_estimates() -> Vec<DemandEstimateDto> {
    model::DEMAND_ESTIMATES
        .iter()
        .map(DemandEstimateDto::from)
        .collect()
}

pub fn selection() -> SelectionDto {
    SelectionDto::from(&model::SELECTION)
}
