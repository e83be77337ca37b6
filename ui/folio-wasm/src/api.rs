//! Browser `fetch` data source and page configuration.

use async_trait::async_trait;
use folio_loader::{DocumentSource, LoadError, cache_busted, parse_document};
use folio_types::{PortfolioDocument, SiteConfig};
use gloo_net::http::Request;

/// Element carrying an optional JSON [`SiteConfig`].
const CONFIG_ELEMENT: &str = "folioConfig";

/// Fetches the data file relative to the page.
#[derive(Debug, Clone)]
pub struct FetchSource {
    path: String,
    cache_bust: bool,
}

impl FetchSource {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            path: config.data_path().to_owned(),
            cache_bust: config.cache_bust(),
        }
    }

    fn url(&self) -> String {
        if self.cache_bust {
            cache_busted(&self.path, js_sys::Date::now() as u64)
        } else {
            self.path.clone()
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for FetchSource {
    fn describe(&self) -> String {
        self.path.clone()
    }

    async fn fetch(&self) -> Result<PortfolioDocument, LoadError> {
        let response = Request::get(&self.url())
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
                body,
            });
        }
        parse_document(&body)
    }
}

/// Read the page's embedded config. Returns the defaults plus the parse
/// error when the element holds invalid JSON; logging is not up yet.
pub fn read_config() -> (SiteConfig, Option<String>) {
    let Some(text) = crate::dom::by_id(CONFIG_ELEMENT).and_then(|el| el.text_content()) else {
        return (SiteConfig::default(), None);
    };
    if text.trim().is_empty() {
        return (SiteConfig::default(), None);
    }
    match SiteConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err.to_string())),
    }
}
