use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::{articles::dtos::ErrorResponse, pipeline::PipelineError};

/// A request that can't be acted on as sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("url too long")]
    UrlTooLong,

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// Failure of an article endpoint, as the client sees it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("scrape failed: {0}")]
    Scrape(#[source] PipelineError),

    #[error("analysis failed: {0}")]
    Analyze(#[source] PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => {
                warn!(error = %e, "Rejected request");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            Self::Scrape(e) => {
                error!(error = %e, "Scrape pipeline failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to scrape article".to_string(),
                )
            }
            Self::Analyze(e) => {
                error!(error = %e, "Analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze article".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
