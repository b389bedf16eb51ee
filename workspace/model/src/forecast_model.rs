use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Forecasting techniques compared in the evaluation.
///
/// The techniques themselves are never run here; only their names are used to
/// label the published results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ForecastModel {
    /// Classical seasonal decomposition.
    Decomposition,
    /// Holt-Winters exponential smoothing.
    ExponentialSmoothing,
    /// Seasonal ARIMA.
    Sarima,
}

impl ForecastModel {
    /// Every model that took part in the evaluation, in report order.
    pub const ALL: [ForecastModel; 3] = [
        ForecastModel::Decomposition,
        ForecastModel::ExponentialSmoothing,
        ForecastModel::Sarima,
    ];

    /// Display name used in tables and narrative text.
    pub const fn name(self) -> &'static str {
        match self {
            ForecastModel::Decomposition => "Decomposition",
            ForecastModel::ExponentialSmoothing => "Exponential Smoothing",
            ForecastModel::Sarima => "SARIMA",
        }
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ForecastModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForecastModel::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}
