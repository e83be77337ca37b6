pub mod config;
pub mod defaults;
pub mod document;

pub use config::{Edition, SiteConfig, THEME_STORAGE_KEY, Timings};
pub use document::{Experience, Language, PortfolioDocument, Project, Record, Testimonial};
