use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flowcast_core::errors::{Error as CoreError, ForecastError};
use serde::Serialize;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    // Surface the underlying error message to help debugging during development
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(inner) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string())
                }
                CoreError::Forecast(inner) => match inner {
                    ForecastError::NotEnoughData => (StatusCode::BAD_REQUEST, inner.to_string()),
                    ForecastError::FitFailed(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, inner.to_string())
                    }
                },
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = Json(ErrorBody { detail });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
