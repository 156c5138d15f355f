use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    app_state::AppState,
    articles::{
        dtos::{AnalyzeRequest, AnalyzeResponse, ArticleResponse, ErrorResponse, ScrapeRequest},
        errors::{ApiError, ValidationError},
    },
    pipeline,
};

fn body_error(rejection: JsonRejection) -> ValidationError {
    ValidationError::InvalidBody(rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/api/scrape",
    tag = "articles",
    request_body = ScrapeRequest,
    responses(
        (status = 200, description = "Article extracted and analyzed", body = ArticleResponse),
        (status = 400, description = "Missing or invalid url", body = ErrorResponse),
        (status = 500, description = "Fetch, extraction or analysis failed", body = ErrorResponse)
    )
)]
pub async fn scrape_article(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let Json(request) = payload.map_err(body_error)?;
    let url = request.validate()?;
    info!(%url, "Scrape requested");

    let analyzed = pipeline::scrape_and_analyze(state.fetcher.as_ref(), state.analyzer.clone(), &url)
        .await
        .map_err(ApiError::Scrape)?;

    Ok(Json(analyzed.into()))
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "articles",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Text analyzed", body = AnalyzeResponse),
        (status = 400, description = "Missing content", body = ErrorResponse),
        (status = 500, description = "Analysis failed", body = ErrorResponse)
    )
)]
pub async fn analyze_article(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload.map_err(body_error)?;
    let input = request.validate()?;
    info!(url = %input.url, chars = input.content.len(), "Analysis requested");

    let analysis = pipeline::analyze_text(state.analyzer.clone(), input.content, input.title, input.url)
        .await
        .map_err(ApiError::Analyze)?;

    Ok(Json(AnalyzeResponse { analysis }))
}
