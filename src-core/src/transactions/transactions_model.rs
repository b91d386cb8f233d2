use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One raw financial movement as supplied by the caller.
///
/// `transaction_date` is kept as the original ISO-8601 string and parsed
/// during aggregation. `debit` and `credit` are optional in the wire format;
/// a missing or null value counts as zero when the net movement is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_date: String,
    #[serde(default)]
    pub debit: Option<Decimal>,
    #[serde(default)]
    pub credit: Option<Decimal>,
}

impl TransactionRecord {
    /// Net movement of this record: credit minus debit.
    pub fn net(&self) -> Decimal {
        self.credit.unwrap_or_default() - self.debit.unwrap_or_default()
    }
}

/// Net cash flow of all transactions on a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCashflow {
    pub date: NaiveDate,
    pub net: Decimal,
}
