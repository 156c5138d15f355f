use thiserror::Error;

/// Why an article page could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not parse url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("only http and https pages can be fetched, got '{0}'")]
    UnsupportedScheme(String),

    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("could not reach host: {0}")]
    Connect(String),

    #[error("timed out connecting to host")]
    ConnectTimeout,

    #[error("timed out waiting for page")]
    RequestTimeout,

    #[error("redirect limit exceeded")]
    RedirectLoop,

    #[error("upstream responded with {0}")]
    Http(reqwest::StatusCode),

    #[error("page exceeds size limit ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("not an html page: {0}")]
    UnsupportedContentType(String),

    #[error("reading page body failed: {0}")]
    Io(String),

    #[error("fetch failed: {0}")]
    Unknown(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ConnectTimeout | Self::RequestTimeout)
    }

    /// Classify a transport error. Timeouts are checked first since reqwest
    /// also marks connect timeouts as connect errors.
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            };
        }
        if err.is_redirect() {
            return Self::RedirectLoop;
        }
        if err.is_connect() || err.is_request() {
            return Self::Connect(err.to_string());
        }
        if err.is_body() || err.is_decode() {
            return Self::Io(err.to_string());
        }
        err.status()
            .map(Self::Http)
            .unwrap_or_else(|| Self::Unknown(err.to_string()))
    }
}
