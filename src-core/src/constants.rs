/// Forecast horizon applied when a request does not specify one.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Minimum number of distinct observed days required before a forecast.
pub const MIN_OBSERVED_DAYS: usize = 2;

/// Length of the weekly seasonal cycle, in days.
pub const SEASONAL_PERIOD_DAYS: i64 = 7;

/// Minimum series span before a weekly seasonal component is estimated.
pub const MIN_SEASONAL_SPAN_DAYS: i64 = 2 * SEASONAL_PERIOD_DAYS;
