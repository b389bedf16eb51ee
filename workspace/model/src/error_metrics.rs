use std::collections::HashSet;

use tracing::debug;

use crate::error::{ModelError, Result};
use crate::forecast_model::ForecastModel;

/// Accuracy of one model on the held-out test window (Jan 2018 - Dec 2019).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorMetricsRow {
    pub model: ForecastModel,
    pub rmse: f64,
    pub mape_percent: f64,
    pub rmspe_percent: f64,
}

/// Column headers of the error metrics table, in display order.
pub const ERROR_METRICS_COLUMNS: [&str; 4] = ["Model", "RMSE", "MAPE (%)", "RMSPE (%)"];

/// Published error metrics, one row per evaluated model.
pub const ERROR_METRICS: [ErrorMetricsRow; 3] = [
    ErrorMetricsRow {
        model: ForecastModel::Decomposition,
        rmse: 5.392,
        mape_percent: 4.419,
        rmspe_percent: 5.073,
    },
    ErrorMetricsRow {
        model: ForecastModel::ExponentialSmoothing,
        rmse: 3.549,
        mape_percent: 2.566,
        rmspe_percent: 3.666,
    },
    ErrorMetricsRow {
        model: ForecastModel::Sarima,
        rmse: 3.671,
        mape_percent: 2.570,
        rmspe_percent: 3.711,
    },
];

impl ErrorMetricsRow {
    fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("rmse", self.rmse),
            ("mape_percent", self.mape_percent),
            ("rmspe_percent", self.rmspe_percent),
        ]
    }
}

/// Returns the row for `model`, if it was evaluated.
pub fn metrics_for(model: ForecastModel) -> Option<&'static ErrorMetricsRow> {
    ERROR_METRICS.iter().find(|row| row.model == model)
}

/// Returns the row with the lowest RMSE.
pub fn lowest_rmse() -> Option<&'static ErrorMetricsRow> {
    ERROR_METRICS
        .iter()
        .min_by(|a, b| a.rmse.total_cmp(&b.rmse))
}

/// Checks row count, model uniqueness and value ranges.
pub fn validate_error_metrics(rows: &[ErrorMetricsRow]) -> Result<()> {
    if rows.len() != ForecastModel::ALL.len() {
        return Err(ModelError::RowCount {
            table: "error_metrics",
            expected: ForecastModel::ALL.len(),
            actual: rows.len(),
        });
    }

    let mut seen = HashSet::new();
    for (index, row) in rows.iter().enumerate() {
        if !seen.insert(row.model) {
            return Err(ModelError::DuplicateModel(row.model.to_string()));
        }
        for (field, value) in row.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidValue {
                    field,
                    row: index,
                    value,
                });
            }
        }
    }

    debug!(rows = rows.len(), "Error metrics table validated");
    Ok(())
}
