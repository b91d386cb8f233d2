use chrono::{Duration, NaiveDate};
use log::debug;

use super::forecast_model::ForecastPoint;
use super::trend_model::AdditiveModel;
use crate::constants::MIN_OBSERVED_DAYS;
use crate::errors::{ForecastError, Result};
use crate::transactions::DailyCashflow;

// Define the trait for the forecast service
pub trait ForecastServiceTrait: Send + Sync {
    fn forecast_cashflow(
        &self,
        series: &[DailyCashflow],
        horizon_days: u32,
    ) -> Result<Vec<ForecastPoint>>;
}

pub struct ForecastService;

impl ForecastService {
    pub fn new() -> Self {
        ForecastService
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastServiceTrait for ForecastService {
    /// Fits a fresh model on the daily series and predicts the next
    /// `horizon_days` calendar days.
    ///
    /// The model predicts over the whole frame, historical dates plus
    /// `horizon_days` contiguous future days after the last observation, and
    /// only the trailing future entries are returned. Requires at least two
    /// distinct observed days.
    fn forecast_cashflow(
        &self,
        series: &[DailyCashflow],
        horizon_days: u32,
    ) -> Result<Vec<ForecastPoint>> {
        if series.len() < MIN_OBSERVED_DAYS {
            return Err(ForecastError::NotEnoughData.into());
        }

        debug!(
            "Fitting cash-flow model on {} observed days, horizon {} days",
            series.len(),
            horizon_days
        );

        let model = AdditiveModel::fit(series)?;
        let last_date = series[series.len() - 1].date;

        let mut frame: Vec<NaiveDate> = series.iter().map(|point| point.date).collect();
        frame.extend((1..=i64::from(horizon_days)).map(|offset| last_date + Duration::days(offset)));

        let mut predictions: Vec<ForecastPoint> = frame
            .into_iter()
            .map(|date| ForecastPoint {
                date,
                predicted_cashflow: model.predict(date),
            })
            .collect();

        let future = predictions.split_off(predictions.len() - horizon_days as usize);
        Ok(future)
    }
}
