use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::error::{ModelError, Result};

/// Estimated monthly consumption produced by the selected model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandEstimateRow {
    /// First day of the forecast month
    pub date: NaiveDate,
    /// Consumption in trillion watts
    pub consumption_twh: f64,
}

pub const DATE_COLUMN: &str = "Date";
pub const CONSUMPTION_COLUMN: &str = "Electricity Consumption (Trillion Watts)";

/// Display format for demand estimate dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const fn month_start(year: i32, month: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => panic!("invalid calendar month"),
    }
}

const fn row(year: i32, month: u32, consumption_twh: f64) -> DemandEstimateRow {
    DemandEstimateRow {
        date: month_start(year, month),
        consumption_twh,
    }
}

/// Monthly demand estimates for January 2020 through December 2021.
pub const DEMAND_ESTIMATES: [DemandEstimateRow; 24] = [
    row(2020, 1, 109.106),
    row(2020, 2, 102.298),
    row(2020, 3, 95.507),
    row(2020, 4, 89.625),
    row(2020, 5, 94.756),
    row(2020, 6, 109.989),
    row(2020, 7, 120.495),
    row(2020, 8, 120.016),
    row(2020, 9, 107.418),
    row(2020, 10, 94.241),
    row(2020, 11, 92.707),
    row(2020, 12, 102.681),
    row(2021, 1, 110.611),
    row(2021, 2, 103.802),
    row(2021, 3, 97.011),
    row(2021, 4, 91.129),
    row(2021, 5, 96.261),
    row(2021, 6, 111.494),
    row(2021, 7, 122.000),
    row(2021, 8, 121.521),
    row(2021, 9, 108.923),
    row(2021, 10, 95.746),
    row(2021, 11, 94.212),
    row(2021, 12, 104.185),
];

impl DemandEstimateRow {
    /// Date rendered as `YYYY-MM-DD`.
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Checks row count, month-start dates, monthly cadence and value ranges.
pub fn validate_demand_estimates(rows: &[DemandEstimateRow]) -> Result<()> {
    if rows.len() != DEMAND_ESTIMATES.len() {
        return Err(ModelError::RowCount {
            table: "demand_estimates",
            expected: DEMAND_ESTIMATES.len(),
            actual: rows.len(),
        });
    }

    for (index, row) in rows.iter().enumerate() {
        if row.date.day() != 1 {
            return Err(ModelError::NotMonthStart(row.date));
        }
        if !row.consumption_twh.is_finite() || row.consumption_twh < 0.0 {
            return Err(ModelError::InvalidValue {
                field: "consumption_twh",
                row: index,
                value: row.consumption_twh,
            });
        }
    }

    for pair in rows.windows(2) {
        let (previous, current) = (pair[0].date, pair[1].date);
        if previous.checked_add_months(Months::new(1)) != Some(current) {
            return Err(ModelError::MonthGap { previous, current });
        }
    }

    debug!(rows = rows.len(), "Demand estimates validated");
    Ok(())
}
