//! Fetch → extract → analyze, all-or-nothing per request.

use std::sync::Arc;

use thiserror::Error;
use tokio::task;
use tracing::{info, instrument};

use crate::{
    analyzer::{AnalysisError, AnalysisResult, Analyzer},
    extractor::{self, ExtractedArticle, ExtractionError},
    fetcher::{FetchError, PageFetcher},
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The blocking extraction/analysis task panicked or was cancelled.
    #[error("pipeline task failed: {0}")]
    Task(String),
}

/// A fully extracted and analyzed article.
#[derive(Debug, Clone)]
pub struct AnalyzedArticle {
    pub article: ExtractedArticle,
    pub analysis: AnalysisResult,
}

/// Fetch `url` and run extraction and analysis on the result.
///
/// Nothing is extracted unless the fetch fully succeeds. Parsing and scoring
/// are CPU-bound and run on the blocking pool.
#[instrument(skip(fetcher, analyzer))]
pub async fn scrape_and_analyze(
    fetcher: &dyn PageFetcher,
    analyzer: Arc<Analyzer>,
    url: &str,
) -> Result<AnalyzedArticle, PipelineError> {
    let page = fetcher.fetch(url).await?;
    info!(
        final_url = %page.url_final,
        status = %page.status,
        fetched_at = %page.fetched_at,
        encoding = page.encoding,
        html_bytes = page.html.len(),
        "Fetched page"
    );

    let source_url = url.to_string();
    let analyzed = task::spawn_blocking(move || -> Result<AnalyzedArticle, PipelineError> {
        let article = extractor::extract(&page.html, &source_url)?;
        let analysis = analyzer.analyze_article(&article)?;
        Ok(AnalyzedArticle { article, analysis })
    })
    .await
    .map_err(|e| PipelineError::Task(e.to_string()))??;

    info!(
        credibility_score = analyzed.analysis.overall_assessment.credibility_score,
        red_flags = analyzed.analysis.red_flags.len(),
        "Article analyzed"
    );
    Ok(analyzed)
}

/// Analyze text that was extracted elsewhere.
pub async fn analyze_text(
    analyzer: Arc<Analyzer>,
    content: String,
    title: String,
    url: String,
) -> Result<AnalysisResult, PipelineError> {
    task::spawn_blocking(move || analyzer.analyze(&content, &title, &url))
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?
        .map_err(PipelineError::from)
}
