pub mod aggregation_service;
pub mod transactions_model;

pub use aggregation_service::{AggregationService, AggregationServiceTrait};
pub use transactions_model::*;
