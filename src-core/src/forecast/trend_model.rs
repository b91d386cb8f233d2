use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;

use crate::constants::MIN_SEASONAL_SPAN_DAYS;
use crate::errors::ForecastError;
use crate::transactions::DailyCashflow;

/// Additive trend-plus-seasonality decomposition of a daily cash-flow series.
///
/// A model instance is fitted fresh for every call and holds nothing beyond
/// the coefficients estimated from the single series it was fitted on. The
/// trend is an ordinary-least-squares line over (days since the first
/// observation, net); when the series spans at least two full weekly cycles,
/// a centered day-of-week component is estimated from the detrended
/// residuals.
#[derive(Debug)]
pub struct AdditiveModel {
    origin: NaiveDate,
    intercept: f64,
    slope: f64,
    weekday_effects: Option<[f64; 7]>,
}

impl AdditiveModel {
    pub fn fit(series: &[DailyCashflow]) -> Result<Self, ForecastError> {
        let first = series
            .first()
            .ok_or_else(|| ForecastError::FitFailed("series is empty".to_string()))?;
        let origin = first.date;

        let observations: Vec<(f64, f64)> = series
            .iter()
            .map(|point| {
                let offset = (point.date - origin).num_days() as f64;
                (offset, point.net.to_f64().unwrap_or(0.0))
            })
            .collect();

        let count = observations.len() as f64;
        let mean_x = observations.iter().map(|(x, _)| x).sum::<f64>() / count;
        let mean_y = observations.iter().map(|(_, y)| y).sum::<f64>() / count;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (x, y) in &observations {
            covariance += (x - mean_x) * (y - mean_y);
            variance += (x - mean_x) * (x - mean_x);
        }

        if variance == 0.0 {
            return Err(ForecastError::FitFailed(
                "series has no date spread".to_string(),
            ));
        }

        let slope = covariance / variance;
        let intercept = mean_y - slope * mean_x;
        let weekday_effects = estimate_weekday_effects(series, origin, intercept, slope);

        Ok(AdditiveModel {
            origin,
            intercept,
            slope,
            weekday_effects,
        })
    }

    /// Predicted net cash flow for a calendar date, historical or future.
    pub fn predict(&self, date: NaiveDate) -> f64 {
        let offset = (date - self.origin).num_days() as f64;
        let mut value = self.intercept + self.slope * offset;
        if let Some(effects) = &self.weekday_effects {
            value += effects[date.weekday().num_days_from_monday() as usize];
        }
        value
    }
}

/// Mean detrended residual per weekday, centered to zero.
///
/// Returns `None` when the series is too short for a weekly cycle to be
/// distinguishable from the trend. Weekdays with no observations contribute
/// a zero effect.
fn estimate_weekday_effects(
    series: &[DailyCashflow],
    origin: NaiveDate,
    intercept: f64,
    slope: f64,
) -> Option<[f64; 7]> {
    let first = series.first()?;
    let last = series.last()?;
    if (last.date - first.date).num_days() < MIN_SEASONAL_SPAN_DAYS {
        return None;
    }

    let mut sums = [0.0f64; 7];
    let mut counts = [0u32; 7];
    for point in series {
        let offset = (point.date - origin).num_days() as f64;
        let residual = point.net.to_f64().unwrap_or(0.0) - (intercept + slope * offset);
        let weekday = point.date.weekday().num_days_from_monday() as usize;
        sums[weekday] += residual;
        counts[weekday] += 1;
    }

    let mut effects = [0.0f64; 7];
    let mut observed = 0usize;
    let mut total = 0.0;
    for weekday in 0..7 {
        if counts[weekday] > 0 {
            effects[weekday] = sums[weekday] / f64::from(counts[weekday]);
            observed += 1;
            total += effects[weekday];
        }
    }
    if observed == 0 {
        return None;
    }

    let mean_effect = total / observed as f64;
    for weekday in 0..7 {
        if counts[weekday] > 0 {
            effects[weekday] -= mean_effect;
        }
    }
    Some(effects)
}
