use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use flowcast_core::{
    constants::MIN_OBSERVED_DAYS,
    errors::{Error as CoreError, ForecastError},
    transactions::TransactionRecord,
};
use tokio::{task, time::timeout};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ForecastRequestBody, ForecastResponse, ForecastedPoint, TransactionPayload},
};

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[utoipa::path(post, path = "/api/v1/forecast", request_body = ForecastRequestBody,
    responses(
        (status = 200, body = ForecastResponse),
        (status = 400, description = "Fewer than 2 distinct transaction dates"),
        (status = 422, description = "Malformed request body"),
    ))]
async fn forecast_cashflow(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ForecastRequestBody>,
) -> ApiResult<Json<ForecastResponse>> {
    let records: Vec<TransactionRecord> =
        body.transactions.into_iter().map(Into::into).collect();
    let daily = state.aggregation_service.aggregate_daily(&records)?;

    if daily.len() < MIN_OBSERVED_DAYS {
        return Err(CoreError::from(ForecastError::NotEnoughData).into());
    }

    // Fitting cost grows with the series; keep it off the async dispatch loop.
    let horizon = body.days;
    let service = state.forecast_service.clone();
    let fit = task::spawn_blocking(move || service.forecast_cashflow(&daily, horizon));
    let points = match timeout(state.fit_timeout, fit).await {
        Ok(Ok(result)) => result?,
        Ok(Err(join_error)) => {
            return Err(ApiError::Internal(format!(
                "Forecast task failed: {join_error}"
            )))
        }
        Err(_) => return Err(ApiError::Internal("Forecast model fit timed out".to_string())),
    };

    Ok(Json(ForecastResponse {
        forecast: points.into_iter().map(ForecastedPoint::from).collect(),
    }))
}

#[derive(OpenApi)]
#[openapi(
    paths(healthz, readyz, forecast_cashflow),
    components(schemas(ForecastRequestBody, TransactionPayload, ForecastResponse, ForecastedPoint)),
    tags((name = "flowcast"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/forecast", post(forecast_cashflow));

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
