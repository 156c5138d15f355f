use std::sync::Arc;

use crate::{
    analyzer::Analyzer,
    config::Config,
    fetcher::{FetchError, HttpFetcher, PageFetcher},
};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>, analyzer: Analyzer) -> Self {
        Self {
            fetcher,
            analyzer: Arc::new(analyzer),
        }
    }

    /// Live HTTP fetcher and the configured analysis policy.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.fetch_timeout())?;
        Ok(Self::new(
            Arc::new(fetcher),
            Analyzer::new(config.policy().policy()),
        ))
    }
}
