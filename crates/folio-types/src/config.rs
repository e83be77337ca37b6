//! Site configuration.
//!
//! The page ships in two editions that differ only in where the data file
//! and images live, whether the data request is cache-busted, and which
//! built-in document stands in when loading fails. Everything else is shared.

use crate::defaults;
use crate::document::PortfolioDocument;
use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    /// Page at the site root, with the programming-languages chart.
    #[default]
    Student,
    /// Page under `src/`, with the testimonial carousel.
    Showcase,
}

impl Edition {
    pub fn data_path(self) -> &'static str {
        match self {
            Edition::Student => "Information/portfolio-data.json",
            Edition::Showcase => "../Information/portfolio-data.json",
        }
    }

    pub fn asset_base(self) -> &'static str {
        match self {
            Edition::Student => "Photos/",
            Edition::Showcase => "../Photos/",
        }
    }

    pub fn cache_bust(self) -> bool {
        matches!(self, Edition::Student)
    }

    pub fn default_document(self) -> PortfolioDocument {
        match self {
            Edition::Student => defaults::student_document(),
            Edition::Showcase => defaults::showcase_document(),
        }
    }
}

/// Timer and layout constants, in milliseconds unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub testimonial_rotation_ms: u32,
    pub notification_lifetime_ms: u32,
    pub notification_slide_in_ms: u32,
    pub notification_slide_out_ms: u32,
    pub submit_delay_ms: u32,
    pub bar_fill_delay_ms: u32,
    pub languages_refresh_ms: u32,
    /// Pixels subtracted from a section's top when picking the active nav link.
    pub scroll_lookahead_px: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            testimonial_rotation_ms: 5_000,
            notification_lifetime_ms: 5_000,
            notification_slide_in_ms: 100,
            notification_slide_out_ms: 300,
            submit_delay_ms: 1_000,
            bar_fill_delay_ms: 300,
            languages_refresh_ms: 100,
            scroll_lookahead_px: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub edition: Edition,
    pub data_path: Option<String>,
    pub asset_base: Option<String>,
    pub cache_bust: Option<bool>,
    pub theme_storage_key: String,
    pub log_level: String,
    pub timings: Timings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_edition(Edition::default())
    }
}

impl SiteConfig {
    pub fn for_edition(edition: Edition) -> Self {
        Self {
            edition,
            data_path: None,
            asset_base: None,
            cache_bust: None,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            log_level: "info".to_owned(),
            timings: Timings::default(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn data_path(&self) -> &str {
        self.data_path
            .as_deref()
            .unwrap_or_else(|| self.edition.data_path())
    }

    pub fn asset_base(&self) -> &str {
        self.asset_base
            .as_deref()
            .unwrap_or_else(|| self.edition.asset_base())
    }

    pub fn cache_bust(&self) -> bool {
        self.cache_bust.unwrap_or_else(|| self.edition.cache_bust())
    }

    pub fn default_document(&self) -> PortfolioDocument {
        self.edition.default_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edition_values_apply_unless_overridden() {
        let config = SiteConfig::for_edition(Edition::Showcase);
        assert_eq!(config.data_path(), "../Information/portfolio-data.json");
        assert_eq!(config.asset_base(), "../Photos/");
        assert!(!config.cache_bust());

        let config = SiteConfig::from_json(
            r#"{"edition":"showcase","assetBase":"/img/","cacheBust":true}"#,
        )
        .unwrap();
        assert_eq!(config.asset_base(), "/img/");
        assert!(config.cache_bust());
        assert_eq!(config.theme_storage_key, THEME_STORAGE_KEY);
    }

    #[test]
    fn empty_config_is_the_student_edition() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.data_path(), "Information/portfolio-data.json");
        assert_eq!(config.timings.testimonial_rotation_ms, 5_000);
    }

    #[test]
    fn partial_timings_keep_remaining_defaults() {
        let config = SiteConfig::from_json(r#"{"timings":{"submitDelayMs":10}}"#).unwrap();
        assert_eq!(config.timings.submit_delay_ms, 10);
        assert_eq!(config.timings.notification_lifetime_ms, 5_000);
    }
}
