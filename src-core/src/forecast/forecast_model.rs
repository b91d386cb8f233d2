use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single predicted point in the future portion of a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_cashflow: f64,
}
