//! Portfolio data loading.
//!
//! A [`DocumentSource`] performs one read of the data file. [`load_or_default`]
//! wraps it so the page always gets a document: any failure is logged and the
//! edition's built-in document is used instead.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpSource;

use async_trait::async_trait;
use folio_types::{Edition, PortfolioDocument};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document root is not a JSON object")]
    NotAnObject,
}

/// Where the portfolio document comes from.
///
/// Futures are not required to be `Send`: the browser's fetch futures are not.
#[async_trait(?Send)]
pub trait DocumentSource {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<PortfolioDocument, LoadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Fetched,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub document: PortfolioDocument,
    pub origin: Origin,
}

/// Fetch the document, substituting the edition's default on any failure.
pub async fn load_or_default<S>(source: &S, edition: Edition) -> Loaded
where
    S: DocumentSource + ?Sized,
{
    match source.fetch().await {
        Ok(document) => {
            info!(source = %source.describe(), "portfolio data loaded");
            Loaded {
                document,
                origin: Origin::Fetched,
            }
        }
        Err(err) => {
            warn!(
                source = %source.describe(),
                error = %err,
                "failed to load portfolio data, using built-in content"
            );
            Loaded {
                document: edition.default_document(),
                origin: Origin::Fallback,
            }
        }
    }
}

/// Parse a response body. The root must be a JSON object.
pub fn parse_document(body: &str) -> Result<PortfolioDocument, LoadError> {
    match serde_json::from_str::<Value>(body)? {
        value @ Value::Object(_) => Ok(PortfolioDocument::new(value)),
        _ => Err(LoadError::NotAnObject),
    }
}

/// Append the cache-defeating `t` parameter to `path`.
pub fn cache_busted(path: &str, epoch_ms: u64) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}t={epoch_ms}")
}

/// In-memory source with a scripted outcome.
#[derive(Debug, Clone)]
pub struct StaticSource {
    status: u16,
    body: Option<String>,
}

impl StaticSource {
    /// Responds `200` with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: Some(body.into()),
        }
    }

    /// Responds with `status` and an empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Some(String::new()),
        }
    }

    /// Fails before any response arrives.
    pub fn unreachable() -> Self {
        Self {
            status: 0,
            body: None,
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_owned()
    }

    async fn fetch(&self) -> Result<PortfolioDocument, LoadError> {
        let Some(body) = &self.body else {
            return Err(LoadError::Transport("resource unreachable".to_owned()));
        };
        if !(200..300).contains(&self.status) {
            return Err(LoadError::Status {
                status: self.status,
                body: body.clone(),
            });
        }
        parse_document(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_bust_respects_existing_query() {
        assert_eq!(cache_busted("data.json", 42), "data.json?t=42");
        assert_eq!(cache_busted("data.json?v=2", 42), "data.json?v=2&t=42");
    }

    #[test]
    fn non_object_roots_are_rejected() {
        assert!(matches!(parse_document("[1, 2]"), Err(LoadError::NotAnObject)));
        assert!(matches!(parse_document("{"), Err(LoadError::Parse(_))));
        assert!(parse_document(r#"{"personal":{}}"#).is_ok());
    }

    #[tokio::test]
    async fn fetched_document_is_used_as_is() {
        let source = StaticSource::ok(r#"{"personal":{"name":"Ada","title":"Engineer"}}"#);
        let loaded = load_or_default(&source, Edition::Student).await;
        assert_eq!(loaded.origin, Origin::Fetched);
        assert_eq!(loaded.document.text("personal.name").as_deref(), Some("Ada"));
        assert!(loaded.document.list("projects").is_none());
    }

    #[tokio::test]
    async fn every_failure_falls_back_to_the_edition_default() {
        let failing = [
            StaticSource::unreachable(),
            StaticSource::status(404),
            StaticSource::status(500),
            StaticSource::ok("<html>not json</html>"),
            StaticSource::ok("\"just a string\""),
        ];
        for source in &failing {
            let loaded = load_or_default(source, Edition::Student).await;
            assert_eq!(loaded.origin, Origin::Fallback);
            assert_eq!(loaded.document, Edition::Student.default_document());
        }

        let loaded = load_or_default(&StaticSource::unreachable(), Edition::Showcase).await;
        assert_eq!(loaded.document.testimonial_count(), 1);
    }
}
