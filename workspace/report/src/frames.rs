//! Table frames handed to the rendering surface.
//!
//! Both tables are built as polars frames so a surface receives an ordered
//! set of named columns and never needs to know which dataset it is drawing.

use model::demand::{CONSUMPTION_COLUMN, DATE_COLUMN};
use model::error_metrics::ERROR_METRICS_COLUMNS;
use model::{DemandEstimateRow, ErrorMetricsRow};
use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::trace;

use crate::error::Result;

/// Builds the model comparison table: Model, RMSE, MAPE (%), RMSPE (%).
pub fn error_metrics_frame(rows: &[ErrorMetricsRow]) -> Result<DataFrame> {
    let models: Vec<&str> = rows.iter().map(|row| row.model.name()).collect();
    let rmse: Vec<f64> = rows.iter().map(|row| row.rmse).collect();
    let mape: Vec<f64> = rows.iter().map(|row| row.mape_percent).collect();
    let rmspe: Vec<f64> = rows.iter().map(|row| row.rmspe_percent).collect();

    let frame = polars::df!(
        ERROR_METRICS_COLUMNS[0] => models,
        ERROR_METRICS_COLUMNS[1] => rmse,
        ERROR_METRICS_COLUMNS[2] => mape,
        ERROR_METRICS_COLUMNS[3] => rmspe
    )?;
    trace!(height = frame.height(), "Built error metrics frame");
    Ok(frame)
}

/// Builds the demand table with dates already formatted as `YYYY-MM-DD`.
pub fn demand_estimates_frame(rows: &[DemandEstimateRow]) -> Result<DataFrame> {
    let dates: Vec<String> = rows.iter().map(DemandEstimateRow::formatted_date).collect();
    let consumption: Vec<f64> = rows.iter().map(|row| row.consumption_twh).collect();

    let frame = polars::df!(
        DATE_COLUMN => dates,
        CONSUMPTION_COLUMN => consumption
    )?;
    trace!(height = frame.height(), "Built demand estimates frame");
    Ok(frame)
}

/// Display text for a single cell. Floats keep three decimals.
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format!("{:.3}", v),
        AnyValue::Float32(v) => format!("{:.3}", v),
        AnyValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Column names in display order.
pub fn column_names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect()
}

/// All cells as display text, row by row.
pub fn rows_as_text(frame: &DataFrame) -> Result<Vec<Vec<String>>> {
    let columns: &[Column] = frame.get_columns();
    let mut rows = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            cells.push(cell_text(column.get(row)?));
        }
        rows.push(cells);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{DEMAND_ESTIMATES, ERROR_METRICS};

    #[test]
    fn test_error_metrics_frame_shape_and_order() {
        let frame = error_metrics_frame(&ERROR_METRICS).unwrap();
        assert_eq!(frame.height(), 3);
        assert_eq!(
            column_names(&frame),
            vec!["Model", "RMSE", "MAPE (%)", "RMSPE (%)"]
        );
    }

    #[test]
    fn test_error_metrics_frame_values() {
        let frame = error_metrics_frame(&ERROR_METRICS).unwrap();
        let models = frame.column("Model").unwrap().str().unwrap();
        let rmse = frame.column("RMSE").unwrap().f64().unwrap();
        assert_eq!(models.get(1), Some("Exponential Smoothing"));
        assert_eq!(rmse.get(1), Some(3.549));
        assert_eq!(rmse.get(0), Some(5.392));
    }

    #[test]
    fn test_demand_frame_dates_are_strings() {
        let frame = demand_estimates_frame(&DEMAND_ESTIMATES).unwrap();
        assert_eq!(frame.height(), 24);
        let dates = frame.column(DATE_COLUMN).unwrap().str().unwrap();
        assert_eq!(dates.get(0), Some("2020-01-01"));
        assert_eq!(dates.get(23), Some("2021-12-01"));
    }

    #[test]
    fn test_rows_as_text_formats_floats() {
        let frame = demand_estimates_frame(&DEMAND_ESTIMATES).unwrap();
        let rows = rows_as_text(&frame).unwrap();
        assert_eq!(rows[18], vec!["2021-07-01".to_string(), "122.000".to_string()]);
    }

    #[test]
    fn test_cell_text_for_null_is_empty() {
        assert_eq!(cell_text(AnyValue::Null), "");
    }
}
