use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Average adult reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Metadata and body text pulled out of one HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedArticle {
    pub title: String,
    pub author: Option<String>,
    /// Passed through exactly as the page states it.
    pub publish_date: Option<String>,
    /// Full body text. Callers truncate for display, never before analysis.
    pub body_text: String,
    pub source_url: String,
    pub domain: Option<String>,
    pub word_count: usize,
    pub reading_time_minutes: usize,
}

impl ExtractedArticle {
    pub fn new(
        title: String,
        author: Option<String>,
        publish_date: Option<String>,
        body_text: String,
        source_url: &str,
    ) -> Self {
        let word_count = body_text.split_whitespace().count();
        let domain = url::Url::parse(source_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));

        Self {
            title,
            author,
            publish_date,
            body_text,
            source_url: source_url.to_string(),
            domain,
            word_count,
            reading_time_minutes: (word_count / WORDS_PER_MINUTE).max(1),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no html content supplied")]
    EmptyDocument,

    #[error("no source url supplied")]
    MissingSourceUrl,
}
