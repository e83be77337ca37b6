//! Content binder for the portfolio page.
//!
//! [`render`] maps a [`PortfolioDocument`](folio_types::PortfolioDocument)
//! onto a [`Surface`]. The browser front end supplies a DOM-backed surface;
//! tests use [`MemorySurface`].

pub mod binder;
pub mod surface;
pub mod templates;

pub use binder::{RenderReport, SkipReason, Skipped, all_regions, render, render_languages};
pub use surface::{MemorySurface, RegionState, Surface};
