use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    analyzer::AnalysisResult, articles::errors::ValidationError, pipeline::AnalyzedArticle,
};

const MAX_URL_LEN: usize = 2048;
/// Characters of body text echoed back for display.
pub const CONTENT_PREVIEW_CHARS: usize = 2000;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ScrapeRequest {
    /// The trimmed URL, if it is an absolute http(s) URL.
    pub fn validate(&self) -> Result<String, ValidationError> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ValidationError::MissingField("url"))?;

        if url.len() > MAX_URL_LEN {
            return Err(ValidationError::UrlTooLong);
        }

        let parsed = url::Url::parse(url).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(url.to_string())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Validated input for the analyzer.
#[derive(Debug, PartialEq, Eq)]
pub struct AnalyzeInput {
    pub content: String,
    pub title: String,
    pub url: String,
}

impl AnalyzeRequest {
    /// Only `content` is required. Blank content passes through and is
    /// rejected by the analyzer itself.
    pub fn validate(self) -> Result<AnalyzeInput, ValidationError> {
        let content = self.content.ok_or(ValidationError::MissingField("content"))?;
        Ok(AnalyzeInput {
            content,
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// First 2000 characters of the body.
    pub content: String,
    pub word_count: usize,
    /// Minutes, never less than one.
    pub reading_time: usize,
    pub ai_analysis: AnalysisResult,
}

impl From<AnalyzedArticle> for ArticleResponse {
    fn from(AnalyzedArticle { article, analysis }: AnalyzedArticle) -> Self {
        Self {
            content: truncate_chars(&article.body_text, CONTENT_PREVIEW_CHARS),
            title: article.title,
            url: article.source_url,
            author: article.author,
            publish_date: article.publish_date,
            domain: article.domain,
            word_count: article.word_count,
            reading_time: article.reading_time_minutes,
            ai_analysis: analysis,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
