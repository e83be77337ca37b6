//! Navigation helpers: project filter and scroll-position tracking.

/// Value of a filter control's `data-filter` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => ProjectFilter::All,
            other => ProjectFilter::Category(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(category) => category,
        }
    }

    /// Whether a card with `category` stays visible.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Page section and its distance from the top of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPosition {
    pub id: String,
    pub top: f64,
}

/// Last section, in document order, whose top minus `lookahead` is at or
/// above the scroll offset.
pub fn active_section(offset: f64, sections: &[SectionPosition], lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| offset >= section.top - lookahead)
        .map(|section| section.id.as_str())
}
