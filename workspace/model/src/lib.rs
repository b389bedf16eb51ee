//! Published results of the electricity demand forecasting study.
//!
//! Everything in this crate is a compile-time constant: the error metrics of
//! the three evaluated models, the model that was selected, and the monthly
//! demand estimates it produced for 2020-2021.

pub mod demand;
pub mod error;
pub mod error_metrics;
pub mod forecast_model;
pub mod selection;

pub use demand::{DEMAND_ESTIMATES, DemandEstimateRow};
pub use error::{ModelError, Result};
pub use error_metrics::{ERROR_METRICS, ErrorMetricsRow};
pub use forecast_model::ForecastModel;
pub use selection::{SELECTION, SelectionJustification};

// Re-export tracing for use in this crate
pub use tracing;

/// Validates every published dataset against its invariants.
pub fn validate() -> Result<()> {
    error_metrics::validate_error_metrics(&ERROR_METRICS)?;
    demand::validate_demand_estimates(&DEMAND_ESTIMATES)?;
    if error_metrics::metrics_for(SELECTION.selected_model).is_none() {
        return Err(ModelError::UnknownModel(SELECTION.selected_model.to_string()));
    }
    Ok(())
}
