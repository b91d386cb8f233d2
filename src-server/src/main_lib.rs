use std::sync::Arc;
use std::time::Duration;

use flowcast_core::{
    forecast::{ForecastService, ForecastServiceTrait},
    transactions::{AggregationService, AggregationServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub aggregation_service: Arc<dyn AggregationServiceTrait>,
    pub forecast_service: Arc<dyn ForecastServiceTrait>,
    pub fit_timeout: Duration,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState {
        aggregation_service: Arc::new(AggregationService::new()),
        forecast_service: Arc::new(ForecastService::new()),
        fit_timeout: config.fit_timeout,
    })
}
