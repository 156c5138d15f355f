use axum::Json;
use utoipa::OpenApi;

use crate::{
    analyzer::{
        AnalysisResult, LanguageAnalysis, Objectivity, OverallAssessment, StrengthsWeaknesses,
        Tone,
    },
    articles::{
        dtos::{AnalyzeRequest, AnalyzeResponse, ArticleResponse, ErrorResponse, ScrapeRequest},
        handlers,
    },
    health,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "skeptic", description = "Article extraction and credibility heuristics"),
    paths(handlers::scrape_article, handlers::analyze_article, health::health_check),
    components(schemas(
        ScrapeRequest,
        AnalyzeRequest,
        ArticleResponse,
        AnalyzeResponse,
        ErrorResponse,
        AnalysisResult,
        LanguageAnalysis,
        OverallAssessment,
        StrengthsWeaknesses,
        Tone,
        Objectivity,
        health::HealthResponse,
    )),
    tags(
        (name = "articles", description = "Scrape and analyze news articles"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
