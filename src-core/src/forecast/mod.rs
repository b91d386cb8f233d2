pub mod forecast_model;
pub mod forecast_service;
pub mod trend_model;

pub use forecast_model::*;
pub use forecast_service::{ForecastService, ForecastServiceTrait};
pub use trend_model::AdditiveModel;
