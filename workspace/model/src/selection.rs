use crate::forecast_model::ForecastModel;

/// Outcome of the model comparison: which model was chosen and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionJustification {
    pub selected_model: ForecastModel,
    pub reason_text: &'static str,
}

pub const SELECTION: SelectionJustification = SelectionJustification {
    selected_model: ForecastModel::ExponentialSmoothing,
    reason_text: "The Exponential Smoothing model exhibited the lowest RMSE (3.549) among all \
evaluated models. A lower RMSE indicates that the model's predictions are, on average, closer \
to the actual values, signifying higher accuracy and better fit to the underlying patterns in \
the electricity consumption data. While MAPE and RMSPE were also competitive, RMSE served as \
the primary selection criterion for its direct measure of prediction error magnitude.",
};

impl SelectionJustification {
    pub fn selected_model_name(&self) -> &'static str {
        self.selected_model.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_metrics::lowest_rmse;

    #[test]
    fn test_selected_model_has_lowest_rmse() {
        assert_eq!(
            lowest_rmse().map(|row| row.model),
            Some(SELECTION.selected_model)
        );
    }

    #[test]
    fn test_reason_mentions_the_winning_rmse() {
        assert!(SELECTION.reason_text.contains("lowest RMSE (3.549)"));
        assert!(!SELECTION.reason_text.contains("  "));
    }
}
