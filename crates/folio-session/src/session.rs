//! Interaction state machine.
//!
//! Every UI action arrives as a [`Command`]; [`Session::handle`] updates the
//! state and returns the [`Effect`]s the page must apply. The session never
//! touches the DOM, timers or the network itself.

use crate::contact::{ContactForm, ContactMessage, SEND_FAILED_MESSAGE, SENT_MESSAGE, SubmitError};
use crate::nav::{ProjectFilter, SectionPosition, active_section};
use crate::theme::{PreferenceStore, Theme};
use folio_types::{PortfolioDocument, SiteConfig, Timings};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => "#17a2b8",
            Severity::Success => "#28a745",
            Severity::Error => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleTheme,
    ToggleMenu,
    /// Any link inside the navigation menu was clicked.
    NavLinkActivated,
    /// In-page anchor clicked; `exists` tells whether its target is on the page.
    FollowAnchor { target: String, exists: bool },
    Scrolled { offset: f64, sections: Vec<SectionPosition> },
    SelectFilter(ProjectFilter),
    NextTestimonial,
    PreviousTestimonial,
    /// Tick of the automatic rotation timer.
    RotateTestimonial,
    SubmitContact(ContactForm),
    SubmissionFinished(Result<(), SubmitError>),
    DismissNotification(NotificationId),
    NotificationExpired(NotificationId),
    /// An animated block entered the viewport. `skill` is the proficiency of
    /// a language row.
    BlockEntered { block: usize, skill: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetBodyTheme(Theme),
    SetNavbarBackground(&'static str),
    SetMenuOpen(bool),
    ScrollTo(String),
    /// Section whose nav link is active; `None` clears all.
    HighlightNav(Option<String>),
    FilterProjects(ProjectFilter),
    ShowTestimonial(usize),
    ShowNotification {
        id: NotificationId,
        severity: Severity,
        message: String,
    },
    RemoveNotification(NotificationId),
    StartSubmission(ContactMessage),
    ResetForm,
    Reveal(usize),
    FillBar {
        block: usize,
        width: String,
        delay_ms: u32,
    },
}

pub struct Session<P> {
    store: P,
    storage_key: String,
    timings: Timings,
    theme: Theme,
    theme_restored: bool,
    menu_open: bool,
    active_section: Option<String>,
    filter: ProjectFilter,
    project_categories: Vec<Option<String>>,
    testimonial_index: usize,
    testimonial_count: usize,
    next_notification: NotificationId,
    live_notifications: BTreeSet<NotificationId>,
    revealed: HashSet<usize>,
}

impl<P: PreferenceStore> Session<P> {
    /// Session for `doc`, with the theme restored from `store`.
    pub fn new(config: &SiteConfig, doc: &PortfolioDocument, store: P) -> Self {
        let saved = store
            .load(&config.theme_storage_key)
            .and_then(|value| Theme::parse(&value));

        Self {
            store,
            storage_key: config.theme_storage_key.clone(),
            timings: config.timings.clone(),
            theme: saved.unwrap_or_default(),
            theme_restored: saved.is_some(),
            menu_open: false,
            active_section: None,
            filter: ProjectFilter::All,
            project_categories: project_categories(doc),
            testimonial_index: 0,
            testimonial_count: doc.testimonial_count(),
            next_notification: 0,
            live_notifications: BTreeSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Adopt a freshly loaded document. The carousel restarts at the first
    /// testimonial and the filter is cleared.
    pub fn set_document(&mut self, doc: &PortfolioDocument) {
        self.project_categories = project_categories(doc);
        self.testimonial_count = doc.testimonial_count();
        self.testimonial_index = 0;
        self.filter = ProjectFilter::All;
    }

    /// Effects to apply once at start-up.
    pub fn start(&self) -> Vec<Effect> {
        if self.theme_restored {
            vec![Effect::SetBodyTheme(self.theme)]
        } else {
            Vec::new()
        }
    }

    pub fn handle(&mut self, command: Command) -> Vec<Effect> {
        debug!(?command, "session command");
        match command {
            Command::ToggleTheme => self.toggle_theme(),
            Command::ToggleMenu => {
                self.menu_open = !self.menu_open;
                vec![Effect::SetMenuOpen(self.menu_open)]
            }
            Command::NavLinkActivated => {
                self.menu_open = false;
                vec![Effect::SetMenuOpen(false)]
            }
            Command::FollowAnchor { target, exists } => {
                if exists {
                    vec![Effect::ScrollTo(target)]
                } else {
                    Vec::new()
                }
            }
            Command::Scrolled { offset, sections } => {
                self.active_section =
                    active_section(offset, &sections, self.timings.scroll_lookahead_px)
                        .map(str::to_owned);
                vec![Effect::HighlightNav(self.active_section.clone())]
            }
            Command::SelectFilter(filter) => {
                self.filter = filter.clone();
                vec![Effect::FilterProjects(filter)]
            }
            Command::NextTestimonial | Command::RotateTestimonial => self.step_testimonial(1),
            Command::PreviousTestimonial => self.step_testimonial(-1),
            Command::SubmitContact(form) => match form.validate() {
                Ok(message) => vec![Effect::StartSubmission(message)],
                Err(err) => vec![self.notify(Severity::Error, err.to_string())],
            },
            Command::SubmissionFinished(Ok(())) => vec![
                self.notify(Severity::Success, SENT_MESSAGE),
                Effect::ResetForm,
            ],
            Command::SubmissionFinished(Err(_)) => {
                vec![self.notify(Severity::Error, SEND_FAILED_MESSAGE)]
            }
            Command::DismissNotification(id) | Command::NotificationExpired(id) => {
                if self.live_notifications.remove(&id) {
                    vec![Effect::RemoveNotification(id)]
                } else {
                    Vec::new()
                }
            }
            Command::BlockEntered { block, skill } => self.reveal(block, skill),
        }
    }

    /// Queue a notification banner.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> Effect {
        let id = self.next_notification;
        self.next_notification += 1;
        self.live_notifications.insert(id);
        Effect::ShowNotification {
            id,
            severity,
            message: message.into(),
        }
    }

    fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        self.store.store(&self.storage_key, self.theme.as_str());
        vec![
            Effect::SetBodyTheme(self.theme),
            Effect::SetNavbarBackground(self.theme.navbar_background()),
        ]
    }

    fn step_testimonial(&mut self, delta: isize) -> Vec<Effect> {
        let count = self.testimonial_count;
        if count == 0 {
            return Vec::new();
        }
        self.testimonial_index = if delta >= 0 {
            (self.testimonial_index + 1) % count
        } else {
            (self.testimonial_index + count - 1) % count
        };
        vec![Effect::ShowTestimonial(self.testimonial_index)]
    }

    fn reveal(&mut self, block: usize, skill: Option<String>) -> Vec<Effect> {
        if !self.revealed.insert(block) {
            return Vec::new();
        }
        let mut effects = vec![Effect::Reveal(block)];
        if let Some(skill) = skill {
            effects.push(Effect::FillBar {
                block,
                width: format!("{skill}%"),
                delay_ms: self.timings.bar_fill_delay_ms,
            });
        }
        effects
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Visibility of each rendered project card under the current filter.
    pub fn visible_projects(&self) -> Vec<bool> {
        self.project_categories
            .iter()
            .map(|category| self.filter.matches(category.as_deref()))
            .collect()
    }

    pub fn testimonial_index(&self) -> usize {
        self.testimonial_index
    }

    /// Auto-rotation period, only when there is something to rotate to.
    pub fn rotation_interval_ms(&self) -> Option<u32> {
        (self.testimonial_count > 1).then_some(self.timings.testimonial_rotation_ms)
    }

    pub fn live_notifications(&self) -> usize {
        self.live_notifications.len()
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}

fn project_categories(doc: &PortfolioDocument) -> Vec<Option<String>> {
    doc.projects()
        .map(|projects| projects.iter().map(|p| p.category()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryStore;
    use folio_types::{Edition, THEME_STORAGE_KEY};
    use serde_json::json;

    fn session_for(doc: serde_json::Value) -> Session<MemoryStore> {
        Session::new(
            &SiteConfig::default(),
            &PortfolioDocument::new(doc),
            MemoryStore::default(),
        )
    }

    fn testimonials(n: usize) -> Session<MemoryStore> {
        let items: Vec<_> = (0..n).map(|i| json!({ "name": format!("T{i}") })).collect();
        session_for(json!({ "testimonials": items }))
    }

    #[test]
    fn theme_defaults_to_dark_and_persists_each_toggle() {
        let mut session = session_for(json!({}));
        assert_eq!(session.theme(), Theme::Dark);
        assert!(session.start().is_empty());

        let effects = session.handle(Command::ToggleTheme);
        assert_eq!(
            effects,
            vec![
                Effect::SetBodyTheme(Theme::Light),
                Effect::SetNavbarBackground("rgba(255, 255, 255, 0.95)"),
            ]
        );
        assert_eq!(session.store().load(THEME_STORAGE_KEY).as_deref(), Some("light"));

        session.handle(Command::ToggleTheme);
        assert_eq!(session.store().load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn saved_theme_is_restored_and_junk_ignored() {
        let config = SiteConfig::default();
        let doc = PortfolioDocument::default();

        let session = Session::new(&config, &doc, MemoryStore::with(THEME_STORAGE_KEY, "light"));
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.start(), vec![Effect::SetBodyTheme(Theme::Light)]);

        let session = Session::new(&config, &doc, MemoryStore::with(THEME_STORAGE_KEY, "sepia"));
        assert_eq!(session.theme(), Theme::Dark);
        assert!(session.start().is_empty());
    }

    #[test]
    fn nav_link_always_closes_the_menu() {
        let mut session = session_for(json!({}));
        assert_eq!(session.handle(Command::ToggleMenu), vec![Effect::SetMenuOpen(true)]);
        assert_eq!(session.handle(Command::NavLinkActivated), vec![Effect::SetMenuOpen(false)]);
        assert!(!session.menu_open());
        assert_eq!(session.handle(Command::NavLinkActivated), vec![Effect::SetMenuOpen(false)]);
    }

    #[test]
    fn anchors_scroll_only_to_existing_targets() {
        let mut session = session_for(json!({}));
        let effects = session.handle(Command::FollowAnchor {
            target: "#about".to_owned(),
            exists: true,
        });
        assert_eq!(effects, vec![Effect::ScrollTo("#about".to_owned())]);
        let effects = session.handle(Command::FollowAnchor {
            target: "#missing".to_owned(),
            exists: false,
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn scrolling_highlights_exactly_one_section() {
        let mut session = session_for(json!({}));
        let sections = vec![
            SectionPosition { id: "home".to_owned(), top: 0.0 },
            SectionPosition { id: "about".to_owned(), top: 900.0 },
        ];
        let effects = session.handle(Command::Scrolled { offset: 750.0, sections });
        assert_eq!(effects, vec![Effect::HighlightNav(Some("about".to_owned()))]);
        assert_eq!(session.active_section(), Some("about"));
    }

    #[test]
    fn filter_shows_matching_cards_only() {
        let mut session = session_for(json!({
            "projects": [
                { "category": "app" },
                { "category": "web-app" },
                { "title": "uncategorised" },
                { "category": "app" }
            ]
        }));
        session.handle(Command::SelectFilter(ProjectFilter::parse("app")));
        assert_eq!(session.visible_projects(), vec![true, false, false, true]);

        let effects = session.handle(Command::SelectFilter(ProjectFilter::parse("all")));
        assert_eq!(effects, vec![Effect::FilterProjects(ProjectFilter::All)]);
        assert_eq!(session.visible_projects(), vec![true; 4]);
    }

    #[test]
    fn testimonials_wrap_in_both_directions() {
        let mut session = testimonials(3);
        assert_eq!(session.handle(Command::PreviousTestimonial), vec![Effect::ShowTestimonial(2)]);
        assert_eq!(session.handle(Command::NextTestimonial), vec![Effect::ShowTestimonial(0)]);
        session.handle(Command::NextTestimonial);
        session.handle(Command::NextTestimonial);
        assert_eq!(session.testimonial_index(), 2);
        assert_eq!(session.handle(Command::RotateTestimonial), vec![Effect::ShowTestimonial(0)]);
        assert_eq!(session.rotation_interval_ms(), Some(5_000));
    }

    #[test]
    fn single_or_no_testimonial_never_moves() {
        let mut one = testimonials(1);
        assert_eq!(one.rotation_interval_ms(), None);
        assert_eq!(one.handle(Command::RotateTestimonial), vec![Effect::ShowTestimonial(0)]);
        assert_eq!(one.testimonial_index(), 0);

        let mut none = testimonials(0);
        assert!(none.handle(Command::NextTestimonial).is_empty());
        assert!(none.handle(Command::PreviousTestimonial).is_empty());
        assert_eq!(none.rotation_interval_ms(), None);
    }

    #[test]
    fn invalid_form_notifies_and_does_not_reset() {
        let mut session = session_for(json!({}));
        let effects = session.handle(Command::SubmitContact(ContactForm {
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            message: String::new(),
        }));
        assert_eq!(
            effects,
            vec![Effect::ShowNotification {
                id: 0,
                severity: Severity::Error,
                message: "Please fill in all required fields.".to_owned(),
            }]
        );
    }

    #[test]
    fn valid_form_submits_then_resets() {
        let mut session = session_for(json!({}));
        let effects = session.handle(Command::SubmitContact(ContactForm {
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            message: "hi".to_owned(),
        }));
        assert!(matches!(effects.as_slice(), [Effect::StartSubmission(m)] if m.message == "hi"));

        let effects = session.handle(Command::SubmissionFinished(Ok(())));
        assert!(matches!(
            effects.as_slice(),
            [Effect::ShowNotification { severity: Severity::Success, .. }, Effect::ResetForm]
        ));
    }

    #[test]
    fn failed_submission_keeps_the_form() {
        let mut session = session_for(json!({}));
        let effects = session.handle(Command::SubmissionFinished(Err(SubmitError("offline".into()))));
        assert_eq!(
            effects,
            vec![Effect::ShowNotification {
                id: 0,
                severity: Severity::Error,
                message: SEND_FAILED_MESSAGE.to_owned(),
            }]
        );
    }

    #[test]
    fn notifications_are_removed_once() {
        let mut session = session_for(json!({}));
        let Effect::ShowNotification { id, .. } = session.notify(Severity::Info, "hello") else {
            panic!("expected a notification");
        };
        assert_eq!(session.live_notifications(), 1);
        assert_eq!(
            session.handle(Command::DismissNotification(id)),
            vec![Effect::RemoveNotification(id)]
        );
        assert!(session.handle(Command::NotificationExpired(id)).is_empty());
        assert_eq!(session.live_notifications(), 0);
    }

    #[test]
    fn blocks_reveal_once_and_language_bars_fill() {
        let mut session = session_for(json!({}));
        assert_eq!(
            session.handle(Command::BlockEntered { block: 3, skill: Some("70".to_owned()) }),
            vec![
                Effect::Reveal(3),
                Effect::FillBar { block: 3, width: "70%".to_owned(), delay_ms: 300 },
            ]
        );
        assert!(session
            .handle(Command::BlockEntered { block: 3, skill: Some("70".to_owned()) })
            .is_empty());
        assert_eq!(
            session.handle(Command::BlockEntered { block: 4, skill: None }),
            vec![Effect::Reveal(4)]
        );
    }

    #[test]
    fn late_document_resets_carousel_and_filter() {
        let mut session = testimonials(0);
        session.handle(Command::SelectFilter(ProjectFilter::parse("app")));
        assert_eq!(session.rotation_interval_ms(), None);

        session.set_document(&PortfolioDocument::new(json!({
            "projects": [{ "category": "web" }],
            "testimonials": [{ "name": "A" }, { "name": "B" }]
        })));

        assert_eq!(session.filter(), &ProjectFilter::All);
        assert_eq!(session.visible_projects(), vec![true]);
        assert_eq!(session.rotation_interval_ms(), Some(5_000));
        assert_eq!(session.handle(Command::NextTestimonial), vec![Effect::ShowTestimonial(1)]);
    }

    #[test]
    fn showcase_default_has_a_single_static_testimonial() {
        let config = SiteConfig::for_edition(Edition::Showcase);
        let session = Session::new(&config, &config.default_document(), MemoryStore::default());
        assert_eq!(session.rotation_interval_ms(), None);
    }
}
