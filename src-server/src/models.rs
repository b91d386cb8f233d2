use flowcast_core::constants::DEFAULT_HORIZON_DAYS;
use flowcast_core::forecast::ForecastPoint;
use flowcast_core::transactions as core_transactions;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TransactionPayload {
    /// ISO-8601 calendar date; a datetime is accepted and its time part ignored.
    pub transaction_date: String,
    #[serde(default)]
    pub debit: Option<Decimal>,
    #[serde(default)]
    pub credit: Option<Decimal>,
}

impl From<TransactionPayload> for core_transactions::TransactionRecord {
    fn from(t: TransactionPayload) -> Self {
        Self {
            transaction_date: t.transaction_date,
            debit: t.debit,
            credit: t.credit,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ForecastRequestBody {
    pub transactions: Vec<TransactionPayload>,
    #[serde(default = "default_horizon")]
    pub days: u32,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_DAYS
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ForecastedPoint {
    pub date: String,
    pub predicted_cashflow: f64,
}

impl From<ForecastPoint> for ForecastedPoint {
    fn from(p: ForecastPoint) -> Self {
        Self {
            date: p.date.format("%Y-%m-%d").to_string(),
            predicted_cashflow: p.predicted_cashflow,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastedPoint>,
}
