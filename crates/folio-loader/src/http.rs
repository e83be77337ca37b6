use crate::{DocumentSource, LoadError, cache_busted, parse_document};
use async_trait::async_trait;
use folio_types::{PortfolioDocument, SiteConfig};
use std::time::{SystemTime, UNIX_EPOCH};

/// HTTP source for the portfolio data file.
///
/// Reads `FOLIO_BASE_URL` from environment at construction time
/// (default: `http://localhost:8000`).
pub struct HttpSource {
    base_url: String,
    path: String,
    cache_bust: bool,
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: Option<String>, path: impl Into<String>) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var("FOLIO_BASE_URL").ok())
            .unwrap_or_else(|| "http://localhost:8000".to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            path: path.into(),
            cache_bust: false,
            http: reqwest::Client::new(),
        }
    }

    /// Source for the configured edition's data path and cache policy.
    pub fn from_config(base_url: Option<String>, config: &SiteConfig) -> Self {
        Self::new(base_url, config.data_path()).with_cache_bust(config.cache_bust())
    }

    pub fn with_cache_bust(mut self, cache_bust: bool) -> Self {
        self.cache_bust = cache_bust;
        self
    }

    fn url(&self) -> String {
        let url = format!("{}/{}", self.base_url, self.path.trim_start_matches("./"));
        if self.cache_bust {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default();
            cache_busted(&url, now)
        } else {
            url
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        format!("{}/{}", self.base_url, self.path)
    }

    async fn fetch(&self) -> Result<PortfolioDocument, LoadError> {
        let response = self
            .http
            .get(self.url())
            .send()
            .await
            .map_err(|err| LoadError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LoadError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_document(&body)
    }
}
