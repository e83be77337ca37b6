//! Rendering surface abstraction.
//!
//! The binder never touches the DOM directly; it writes through a
//! [`Surface`]. Regions are addressed by CSS selector (`#id` or `.class`)
//! and writing to a region that does not exist is a silent no-op.

use std::collections::BTreeMap;

pub trait Surface {
    fn has_region(&self, selector: &str) -> bool;
    /// Replace the region's content with plain text.
    fn set_text(&mut self, selector: &str, text: &str);
    /// Point an anchor region at `url`.
    fn set_href(&mut self, selector: &str, url: &str);
    /// Replace the region's content with a markup fragment.
    fn set_markup(&mut self, selector: &str, markup: &str);
    fn set_title(&mut self, title: &str);
}

/// State of one region in a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionState {
    pub text: Option<String>,
    pub markup: Option<String>,
    pub href: Option<String>,
    /// Number of content writes, for idempotence checks.
    pub writes: usize,
}

/// In-memory page used in tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    title: Option<String>,
    regions: BTreeMap<String, RegionState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page containing exactly the given regions, all empty.
    pub fn with_regions<'a>(selectors: impl IntoIterator<Item = &'a str>) -> Self {
        let mut surface = Self::new();
        for selector in selectors {
            surface.add_region(selector);
        }
        surface
    }

    pub fn add_region(&mut self, selector: &str) -> &mut RegionState {
        self.regions.entry(selector.to_owned()).or_default()
    }

    /// Anchor region with a pre-existing destination.
    pub fn add_anchor(&mut self, selector: &str, href: &str) {
        self.add_region(selector).href = Some(href.to_owned());
    }

    pub fn region(&self, selector: &str) -> Option<&RegionState> {
        self.regions.get(selector)
    }

    pub fn text(&self, selector: &str) -> Option<&str> {
        self.region(selector)?.text.as_deref()
    }

    pub fn markup(&self, selector: &str) -> Option<&str> {
        self.region(selector)?.markup.as_deref()
    }

    pub fn href(&self, selector: &str) -> Option<&str> {
        self.region(selector)?.href.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Surface for MemorySurface {
    fn has_region(&self, selector: &str) -> bool {
        self.regions.contains_key(selector)
    }

    fn set_text(&mut self, selector: &str, text: &str) {
        if let Some(region) = self.regions.get_mut(selector) {
            region.text = Some(text.to_owned());
            region.markup = None;
            region.writes += 1;
        }
    }

    fn set_href(&mut self, selector: &str, url: &str) {
        if let Some(region) = self.regions.get_mut(selector) {
            region.href = Some(url.to_owned());
        }
    }

    fn set_markup(&mut self, selector: &str, markup: &str) {
        if let Some(region) = self.regions.get_mut(selector) {
            region.markup = Some(markup.to_owned());
            region.text = None;
            region.writes += 1;
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_missing_regions_are_ignored() {
        let mut surface = MemorySurface::with_regions(["#present"]);
        surface.set_text("#absent", "x");
        surface.set_markup("#absent", "<b>x</b>");
        surface.set_href("#absent", "https://example.com");
        assert!(!surface.has_region("#absent"));
        assert!(surface.region("#absent").is_none());
    }

    #[test]
    fn text_and_markup_replace_each_other() {
        let mut surface = MemorySurface::with_regions(["#r"]);
        surface.set_markup("#r", "<i>a</i>");
        surface.set_text("#r", "b");
        assert_eq!(surface.text("#r"), Some("b"));
        assert_eq!(surface.markup("#r"), None);
        assert_eq!(surface.region("#r").map(|r| r.writes), Some(2));
    }
}
