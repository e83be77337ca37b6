//! Content binder: copies document fields into page regions.
//!
//! Bindings run in a fixed order and each one either writes its region or is
//! skipped. A skip never stops the remaining bindings. Running [`render`]
//! again rewrites exactly the same regions.

use crate::surface::Surface;
use crate::templates;
use folio_types::{PortfolioDocument, SiteConfig};
use tracing::{debug, warn};

/// Where a text region takes its value from.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Field(&'static str),
    /// String list joined with a separator.
    Joined(&'static str, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct TextBinding {
    pub region: &'static str,
    /// Tried in order; the first non-empty value wins.
    pub sources: &'static [Source],
    pub fallback: Option<&'static str>,
}

pub const TEXT_BINDINGS: &[TextBinding] = &[
    TextBinding {
        region: "#heroSubtitle",
        sources: &[Source::Field("personal.tagline")],
        fallback: None,
    },
    TextBinding {
        region: "#heroDescription",
        sources: &[Source::Field("personal.bio")],
        fallback: None,
    },
    TextBinding {
        region: "#aboutBio",
        sources: &[Source::Field("personal.aboutBio"), Source::Field("personal.bio")],
        fallback: None,
    },
    TextBinding {
        region: "#education",
        sources: &[Source::Field("education.0.degree")],
        fallback: Some("Bachelor of Science in Computer Science"),
    },
    TextBinding {
        region: "#location",
        sources: &[Source::Field("personal.location")],
        fallback: None,
    },
    TextBinding {
        region: "#interests",
        sources: &[Source::Joined("interests", ", ")],
        fallback: Some("Photography, Reading, Hiking, Cooking, Gaming"),
    },
    TextBinding {
        region: "#contactEmail",
        sources: &[Source::Field("personal.email")],
        fallback: None,
    },
    TextBinding {
        region: "#contactPhone",
        sources: &[Source::Field("personal.phone")],
        fallback: None,
    },
    TextBinding {
        region: "#contactLocation",
        sources: &[Source::Field("personal.location")],
        fallback: None,
    },
];

/// Social platform key → anchor region.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("github", "#githubLink"),
    ("linkedin", "#linkedinLink"),
    ("facebook", "#facebookLink"),
    ("twitter", "#twitterLink"),
    ("instagram", "#instagramLink"),
];

/// Skill region → category keys, first present list wins.
pub const SKILL_REGIONS: &[(&str, &[&str])] = &[
    ("#frontendSkills", &["frontend"]),
    ("#backendSkills", &["backend"]),
    ("#databaseSkills", &["database"]),
    ("#toolsSkills", &["devops", "tools"]),
];

pub const EXPERIENCE_REGION: &str = "#experienceTimeline";
pub const PROJECTS_REGION: &str = "#projectsGrid";
pub const LANGUAGES_REGION: &str = ".languages-chart";
pub const TESTIMONIALS_REGION: &str = "#testimonialsSlider";

/// Every region the binder may write.
pub fn all_regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = TEXT_BINDINGS.iter().map(|b| b.region).collect();
    regions.extend(SOCIAL_LINKS.iter().map(|(_, region)| *region));
    regions.extend(SKILL_REGIONS.iter().map(|(region, _)| *region));
    regions.extend([
        EXPERIENCE_REGION,
        PROJECTS_REGION,
        LANGUAGES_REGION,
        TESTIMONIALS_REGION,
    ]);
    regions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingField,
    MissingRegion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub binding: &'static str,
    pub reason: SkipReason,
}

/// What one render pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub title: Option<String>,
    pub written: Vec<&'static str>,
    pub skipped: Vec<Skipped>,
}

impl RenderReport {
    pub fn wrote(&self, region: &str) -> bool {
        self.written.iter().any(|w| *w == region)
    }

    pub fn skipped(&self, binding: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.binding == binding)
            .map(|s| s.reason)
    }
}

struct Binder<'a, S: Surface + ?Sized> {
    doc: &'a PortfolioDocument,
    surface: &'a mut S,
    asset_base: &'a str,
    report: RenderReport,
}

impl<'a, S: Surface + ?Sized> Binder<'a, S> {
    fn new(doc: &'a PortfolioDocument, surface: &'a mut S, config: &'a SiteConfig) -> Self {
        Self {
            doc,
            surface,
            asset_base: config.asset_base(),
            report: RenderReport::default(),
        }
    }

    fn skip(&mut self, binding: &'static str, reason: SkipReason) {
        debug!(binding, ?reason, "binding skipped");
        self.report.skipped.push(Skipped { binding, reason });
    }

    fn write_text(&mut self, region: &'static str, text: &str) {
        self.surface.set_text(region, text);
        self.report.written.push(region);
    }

    fn write_markup(&mut self, region: &'static str, markup: &str) {
        self.surface.set_markup(region, markup);
        self.report.written.push(region);
    }

    fn bind_title(&mut self) {
        let name = self.doc.text("personal.name");
        let title = self.doc.text("personal.title");
        match (name, title) {
            (Some(name), Some(title)) => {
                let page_title = format!("{name} - {title}");
                self.surface.set_title(&page_title);
                self.report.title = Some(page_title);
            }
            _ => self.skip("title", SkipReason::MissingField),
        }
    }

    fn bind_text(&mut self) {
        for binding in TEXT_BINDINGS {
            if !self.surface.has_region(binding.region) {
                self.skip(binding.region, SkipReason::MissingRegion);
                continue;
            }
            let value = binding
                .sources
                .iter()
                .find_map(|source| match *source {
                    Source::Field(path) => self.doc.text(path),
                    Source::Joined(path, sep) => self.doc.joined(path, sep),
                })
                .or_else(|| binding.fallback.map(str::to_owned));
            match value {
                Some(text) => self.write_text(binding.region, &text),
                None => self.skip(binding.region, SkipReason::MissingField),
            }
        }
    }

    fn bind_social(&mut self) {
        if self.doc.entries("social").is_none() {
            self.skip("social", SkipReason::MissingField);
            return;
        }
        for &(platform, region) in SOCIAL_LINKS {
            let Some(url) = self.doc.text(&format!("social.{platform}")) else {
                self.skip(region, SkipReason::MissingField);
                continue;
            };
            if !self.surface.has_region(region) {
                self.skip(region, SkipReason::MissingRegion);
                continue;
            }
            self.surface.set_href(region, &url);
            self.report.written.push(region);
        }
    }

    fn bind_skills(&mut self) {
        if self.doc.entries("skills").is_none() {
            self.skip("skills", SkipReason::MissingField);
            return;
        }
        for &(region, categories) in SKILL_REGIONS {
            let skills = categories
                .iter()
                .find_map(|category| self.doc.strings(&format!("skills.{category}")));
            match skills {
                Some(_) if !self.surface.has_region(region) => {
                    self.skip(region, SkipReason::MissingRegion)
                }
                Some(skills) => self.write_markup(region, &templates::skill_tags(&skills)),
                None => self.skip(region, SkipReason::MissingField),
            }
        }
    }

    fn bind_experience(&mut self) {
        let Some(items) = self.doc.experience() else {
            self.skip(EXPERIENCE_REGION, SkipReason::MissingField);
            return;
        };
        if !self.surface.has_region(EXPERIENCE_REGION) {
            self.skip(EXPERIENCE_REGION, SkipReason::MissingRegion);
            return;
        }
        let markup: String = items.iter().map(templates::experience_item).collect();
        self.write_markup(EXPERIENCE_REGION, &markup);
    }

    fn bind_projects(&mut self) {
        let Some(items) = self.doc.projects() else {
            self.skip(PROJECTS_REGION, SkipReason::MissingField);
            return;
        };
        if !self.surface.has_region(PROJECTS_REGION) {
            self.skip(PROJECTS_REGION, SkipReason::MissingRegion);
            return;
        }
        let markup: String = items
            .iter()
            .map(|project| templates::project_card(project, self.asset_base))
            .collect();
        self.write_markup(PROJECTS_REGION, &markup);
    }

    fn bind_languages(&mut self) {
        let Some(items) = self.doc.languages() else {
            warn!("programming languages data not found");
            self.skip(LANGUAGES_REGION, SkipReason::MissingField);
            return;
        };
        if !self.surface.has_region(LANGUAGES_REGION) {
            warn!("languages chart element not found");
            self.skip(LANGUAGES_REGION, SkipReason::MissingRegion);
            return;
        }
        debug!(count = items.len(), "rendering programming languages");
        let markup: String = items.iter().map(templates::language_item).collect();
        self.write_markup(LANGUAGES_REGION, &markup);
    }

    fn bind_testimonials(&mut self) {
        let Some(items) = self.doc.testimonials() else {
            self.skip(TESTIMONIALS_REGION, SkipReason::MissingField);
            return;
        };
        if !self.surface.has_region(TESTIMONIALS_REGION) {
            self.skip(TESTIMONIALS_REGION, SkipReason::MissingRegion);
            return;
        }
        let markup: String = items
            .iter()
            .enumerate()
            .map(|(index, t)| templates::testimonial_item(t, index, self.asset_base))
            .collect();
        self.write_markup(TESTIMONIALS_REGION, &markup);
    }
}

/// Render every section of `doc` onto `surface`.
pub fn render<S>(doc: &PortfolioDocument, surface: &mut S, config: &SiteConfig) -> RenderReport
where
    S: Surface + ?Sized,
{
    let mut binder = Binder::new(doc, surface, config);
    binder.bind_title();
    binder.bind_text();
    binder.bind_social();
    binder.bind_skills();
    binder.bind_experience();
    binder.bind_projects();
    binder.bind_languages();
    binder.bind_testimonials();
    binder.report
}

/// Re-render only the programming-languages chart.
pub fn render_languages<S>(doc: &PortfolioDocument, surface: &mut S, config: &SiteConfig) -> RenderReport
where
    S: Surface + ?Sized,
{
    let mut binder = Binder::new(doc, surface, config);
    binder.bind_languages();
    binder.report
}
