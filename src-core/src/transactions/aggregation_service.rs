use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::transactions_model::{DailyCashflow, TransactionRecord};
use crate::errors::{Result, ValidationError};

// Define the trait for the aggregation service
pub trait AggregationServiceTrait: Send + Sync {
    fn aggregate_daily(&self, transactions: &[TransactionRecord]) -> Result<Vec<DailyCashflow>>;
}

pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        AggregationService
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationServiceTrait for AggregationService {
    /// Collapses raw transactions into a daily net cash-flow series.
    ///
    /// Records are grouped by calendar date (time-of-day discarded) and the
    /// per-day nets are summed. The returned series is ordered ascending by
    /// date with one entry per distinct date; dates absent from the input are
    /// not filled in.
    fn aggregate_daily(&self, transactions: &[TransactionRecord]) -> Result<Vec<DailyCashflow>> {
        debug!(
            "Aggregating {} transactions into a daily series",
            transactions.len()
        );

        let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for transaction in transactions {
            let date = parse_transaction_date(&transaction.transaction_date)?;
            *daily.entry(date).or_insert_with(Decimal::zero) += transaction.net();
        }

        Ok(daily
            .into_iter()
            .map(|(date, net)| DailyCashflow { date, net })
            .collect())
    }
}

/// Parses an ISO-8601 date or datetime string into a calendar date.
///
/// Any time-of-day component is discarded.
pub fn parse_transaction_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.date());
    }
    Err(ValidationError::InvalidDate(raw.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn record(date: &str, debit: Option<Decimal>, credit: Option<Decimal>) -> TransactionRecord {
        TransactionRecord {
            transaction_date: date.to_string(),
            debit,
            credit,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn groups_duplicate_dates_into_a_single_entry() {
        let service = AggregationService::new();
        let daily = service
            .aggregate_daily(&[
                record("2024-01-01", None, Some(dec!(30))),
                record("2024-01-01", Some(dec!(10)), None),
            ])
            .unwrap();

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].date, ymd(2024, 1, 1));
        assert_eq!(daily[0].net, dec!(20));
    }

    #[test]
    fn orders_series_ascending_regardless_of_input_order() {
        let service = AggregationService::new();
        let shuffled = [
            record("2024-03-05", None, Some(dec!(5))),
            record("2024-01-20", Some(dec!(7)), None),
            record("2024-02-11", None, Some(dec!(3))),
        ];
        let mut reversed = shuffled.clone();
        reversed.reverse();

        let daily = service.aggregate_daily(&shuffled).unwrap();
        let daily_reversed = service.aggregate_daily(&reversed).unwrap();

        let dates: Vec<NaiveDate> = daily.iter().map(|point| point.date).collect();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 20), ymd(2024, 2, 11), ymd(2024, 3, 5)]
        );
        assert_eq!(daily, daily_reversed);
    }

    #[test]
    fn missing_amounts_count_as_zero() {
        let service = AggregationService::new();
        let daily = service
            .aggregate_daily(&[
                record("2024-01-01", None, None),
                record("2024-01-01", None, Some(dec!(100))),
            ])
            .unwrap();

        assert_eq!(daily[0].net, dec!(100));
    }

    #[test]
    fn preserves_total_net_across_aggregation() {
        let service = AggregationService::new();
        let transactions = [
            record("2024-01-01", Some(dec!(25.50)), Some(dec!(100))),
            record("2024-01-01", Some(dec!(10)), None),
            record("2024-01-03", None, Some(dec!(42.42))),
            record("2024-01-09", Some(dec!(3.03)), Some(dec!(1))),
        ];
        let raw_total: Decimal = transactions.iter().map(TransactionRecord::net).sum();

        let daily = service.aggregate_daily(&transactions).unwrap();
        let aggregated_total: Decimal = daily.iter().map(|point| point.net).sum();

        assert_eq!(aggregated_total, raw_total);
    }

    #[test]
    fn truncates_datetime_to_calendar_date() {
        let service = AggregationService::new();
        let daily = service
            .aggregate_daily(&[
                record("2024-01-01T09:15:00", None, Some(dec!(10))),
                record("2024-01-01", None, Some(dec!(5))),
                record("2024-01-01T23:59:59+02:00", Some(dec!(1)), None),
            ])
            .unwrap();

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].net, dec!(14));
    }

    #[test]
    fn rejects_unparseable_date() {
        let service = AggregationService::new();
        let result = service.aggregate_daily(&[record("not-a-date", None, Some(dec!(1)))]);

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidDate(_)))
        ));
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let service = AggregationService::new();
        let daily = service.aggregate_daily(&[]).unwrap();
        assert!(daily.is_empty());
    }
}
