use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// An HTML page that was fetched and decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub url_final: Url,
    pub status: StatusCode,
    pub html: String,
    /// WHATWG name of the encoding the body was decoded from.
    pub encoding: &'static str,
    pub fetched_at: DateTime<Utc>,
}
