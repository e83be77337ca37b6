//! Markup fragments for list sections.
//!
//! Field values are inserted verbatim. The data file is treated as trusted
//! content and nothing here escapes HTML; a data file from an untrusted
//! author can inject markup into the page.

use folio_types::{Experience, Language, Project, Testimonial};

pub const PROJECT_PLACEHOLDER: &str = "https://via.placeholder.com/400x200/4a90e2/ffffff?text=";
pub const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/60x60/4a90e2/ffffff?text=";

/// Placeholder image showing the project title.
pub fn project_placeholder(title: &str) -> String {
    format!("{}{}", PROJECT_PLACEHOLDER, urlencoding::encode(title))
}

/// Placeholder avatar showing the author's initial.
pub fn avatar_placeholder(initial: &str) -> String {
    format!("{}{}", AVATAR_PLACEHOLDER, urlencoding::encode(initial))
}

fn or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn tech_spans(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|tech| format!("<span>{}</span>", tech))
        .collect()
}

pub fn skill_tags(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, skill))
        .collect()
}

pub fn experience_item(exp: &Experience<'_>) -> String {
    format!(
        r#"
            <div class="timeline-item">
                <div class="timeline-content">
                    <h3 class="timeline-title">{}</h3>
                    <p class="timeline-company">{}</p>
                    <p class="timeline-period">{}</p>
                    <p class="timeline-description">{}</p>
                    <div class="timeline-tech">
                        {}
                    </div>
                </div>
            </div>
        "#,
        or_empty(exp.title()),
        or_empty(exp.company()),
        or_empty(exp.period()),
        or_empty(exp.description()),
        tech_spans(&exp.technologies()),
    )
}

/// Project card. The image carries its placeholder in `data-fallback-src`;
/// the page swaps it in only if the primary image fails to load.
pub fn project_card(project: &Project<'_>, asset_base: &str) -> String {
    let title = or_empty(project.title());
    format!(
        r#"
            <div class="project-card" data-category="{category}">
                <img src="{asset_base}{image}" alt="{title}" class="project-image"
                     data-fallback-src="{fallback}">
                <div class="project-content">
                    <h3 class="project-title">{title}</h3>
                    <p class="project-description">{description}</p>
                    <div class="project-tech">
                        {tech}
                    </div>
                    <div class="project-links">
                        <a href="{live}" class="project-link live" target="_blank" rel="noopener">
                            <i class="fas fa-external-link-alt"></i> Live Demo
                        </a>
                        <a href="{github}" class="project-link github" target="_blank" rel="noopener">
                            <i class="fab fa-github"></i> Code
                        </a>
                    </div>
                </div>
            </div>
        "#,
        category = or_empty(project.category()),
        image = or_empty(project.image()),
        fallback = project_placeholder(&title),
        description = or_empty(project.description()),
        tech = tech_spans(&project.technologies()),
        live = project.live_url().unwrap_or_else(|| "#".to_owned()),
        github = project.github_url().unwrap_or_else(|| "#".to_owned()),
    )
}

/// Language row with an empty bar; the fill happens when it scrolls into view.
pub fn language_item(lang: &Language<'_>) -> String {
    let proficiency = or_empty(lang.proficiency());
    format!(
        r#"
            <div class="language-item" data-skill="{proficiency}">
                <div class="language-info">
                    <span class="language-name">{}</span>
                    <span class="language-percentage">{proficiency}%</span>
                </div>
                <div class="skill-bar">
                    <div class="skill-progress" style="width: 0%"></div>
                </div>
            </div>
        "#,
        or_empty(lang.name()),
    )
}

pub fn testimonial_item(testimonial: &Testimonial<'_>, index: usize, asset_base: &str) -> String {
    let name = or_empty(testimonial.name());
    let active = if index == 0 { "active" } else { "" };
    format!(
        r#"
            <div class="testimonial-item {active}" data-index="{index}">
                <p class="testimonial-quote">"{quote}"</p>
                <div class="testimonial-author">
                    <img src="{asset_base}{avatar}" alt="{name}" class="testimonial-avatar"
                         data-fallback-src="{fallback}">
                    <div class="testimonial-info">
                        <h4>{name}</h4>
                        <p>{role} at {company}</p>
                    </div>
                </div>
            </div>
        "#,
        quote = or_empty(testimonial.quote()),
        avatar = or_empty(testimonial.avatar()),
        fallback = avatar_placeholder(&or_empty(testimonial.initial())),
        role = or_empty(testimonial.role()),
        company = or_empty(testimonial.company()),
    )
}
