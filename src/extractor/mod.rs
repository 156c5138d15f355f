pub mod body;
pub mod metadata;
pub mod model;
pub mod text;

#[cfg(test)]
mod tests;

pub use model::{ExtractedArticle, ExtractionError};

use scraper::Html;
use tracing::{debug, instrument};

/// Build an [`ExtractedArticle`] from a page's HTML.
///
/// Missing metadata never fails extraction; only an empty document or an
/// empty source URL does.
#[instrument(skip_all, fields(source_url = %source_url, html_bytes = html.len()))]
pub fn extract(html: &str, source_url: &str) -> Result<ExtractedArticle, ExtractionError> {
    if source_url.trim().is_empty() {
        return Err(ExtractionError::MissingSourceUrl);
    }
    if html.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    let document = Html::parse_document(html);

    let title = metadata::title(&document);
    let author = metadata::author(&document);
    let publish_date = metadata::publish_date(&document);
    let body_text = body::body_text(&document);

    debug!(
        title = %title,
        has_author = author.is_some(),
        has_date = publish_date.is_some(),
        body_chars = body_text.chars().count(),
        "Extracted article"
    );

    Ok(ExtractedArticle::new(
        title,
        author,
        publish_date,
        body_text,
        source_url,
    ))
}
