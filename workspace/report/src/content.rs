//! Fixed narrative text of the report.

use std::path::Path;

pub const PAGE_TITLE: &str = "Electricity Demand Forecasting Report";
pub const TITLE: &str = "⚡ Electricity Demand Forecasting Report";

pub const INTRODUCTION: &str = "
This report provides an overview of the electricity demand forecasting analysis,
including the methodology, model performance, and future demand estimations.
";

pub const METHODOLOGY_HEADER: &str = "1. Methodology";
pub const METHODOLOGY: &str = "
The forecasting process involved:
-   **Data Preprocessing:** Loading `Electricity Consumption.csv`, converting 'DATE' to datetime, and setting it as the index.
-   **Data Splitting:** Dividing data into training (Jan 1973 - Dec 2017) and testing (Jan 2018 - Dec 2019) sets for model validation.
-   **Model Implementation:** Comparing Decomposition, Exponential Smoothing (Holt-Winters), and SARIMA models.
-   **Error Metrics:** Evaluating models using RMSE, MAPE, and RMSPE.
";

pub const RESULTS_HEADER: &str = "2. Results and Model Comparison";
pub const RESULTS_INTRO: &str =
    "The error metrics calculated for each model on the test data are as follows:";

pub const SELECTION_HEADER: &str = "3. Selected Model and Justification";

pub fn selection_sentence(model_name: &str) -> String {
    format!(
        "Based on the evaluation metrics, the **{} Model** was selected as the best-performing model for forecasting electricity demand.",
        model_name
    )
}

pub fn reason_sentence(reason: &str) -> String {
    format!("**Reason for Selection:** {}", reason)
}

pub const DEMAND_HEADER: &str = "4. Demand Estimation for Next 1-2 Years";

pub fn demand_intro(model_name: &str) -> String {
    format!(
        "Using the selected {} model, the monthly electricity demand for the next 1-2 years (January 2020 to December 2021) is estimated:",
        model_name
    )
}

pub const VISUALIZATION_HEADER: &str = "5. Visualization of Forecasts";
pub const VISUALIZATION_INTRO: &str = "The following plot visualizes the historical data, actual test data, and the forecasts from all models.";
pub const IMAGE_CAPTION: &str = "Electricity Consumption Forecast (1-2 Years)";

pub fn missing_image_warning(path: &Path) -> String {
    format!(
        "Forecast plot image '{}' not found. Please run the forecasting script to generate it.",
        path.display()
    )
}

pub const CONCLUSION_HEADER: &str = "6. Conclusion";
pub const CONCLUSION: &str = "
The Exponential Smoothing model provides reliable monthly forecasts for electricity demand for the next two years.
These estimations can be valuable for strategic planning, resource allocation, and operational management of electricity production to meet anticipated demand.
Further refinements could include incorporating external factors (e.g., temperature, economic indicators) and exploring more advanced models or ensemble methods for even greater accuracy.
";
