//! Applies session effects to the page.
//!
//! [`dispatch`] is the single path from a UI event to the DOM: the command
//! goes through the session, then each returned effect is applied here.

use crate::dom::{self, Elements};
use crate::{notify, observe, state};
use folio_session::{Command, ContactMessage, Effect, ProjectFilter, Theme, simulate_submission};
use gloo_timers::future::TimeoutFuture;
use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn dispatch(els: &Elements, command: Command) {
    let effects = state::handle(command);
    apply(els, effects);
}

pub fn apply(els: &Elements, effects: Vec<Effect>) {
    for effect in effects {
        apply_one(els, effect);
    }
}

fn apply_one(els: &Elements, effect: Effect) {
    match effect {
        Effect::SetBodyTheme(theme) => set_body_theme(els, theme),
        Effect::SetNavbarBackground(background) => {
            if let Some(navbar) = &els.navbar {
                dom::set_style(navbar, "background", background);
            }
        }
        Effect::SetMenuOpen(open) => {
            for el in [&els.nav_toggle, &els.nav_menu].into_iter().flatten() {
                dom::toggle_class(el, "active", open);
            }
        }
        Effect::ScrollTo(target) => scroll_to(&target),
        Effect::HighlightNav(section) => {
            let wanted = section.map(|id| format!("#{id}"));
            for link in &els.nav_links {
                let active = wanted.is_some() && link.get_attribute("href") == wanted;
                dom::toggle_class(link, "active", active);
            }
        }
        Effect::FilterProjects(filter) => filter_projects(els, &filter),
        Effect::ShowTestimonial(index) => {
            for (i, item) in dom::query_all(".testimonial-item").iter().enumerate() {
                dom::toggle_class(item, "active", i == index);
            }
        }
        Effect::ShowNotification {
            id,
            severity,
            message,
        } => notify::show(els, id, severity, &message),
        Effect::RemoveNotification(id) => notify::slide_out(id),
        Effect::StartSubmission(message) => start_submission(els, message),
        Effect::ResetForm => {
            if let Some(form) = &els.contact_form {
                form.reset();
            }
        }
        Effect::Reveal(block) => observe::reveal(block),
        Effect::FillBar {
            block,
            width,
            delay_ms,
        } => observe::fill_bar(block, width, delay_ms),
    }
}

fn set_body_theme(els: &Elements, theme: Theme) {
    dom::remove_class(&els.body, Theme::Dark.body_class());
    dom::remove_class(&els.body, Theme::Light.body_class());
    dom::add_class(&els.body, theme.body_class());
}

fn scroll_to(target: &str) {
    let Some(section) = dom::query(target) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

fn filter_projects(els: &Elements, filter: &ProjectFilter) {
    for btn in &els.filter_btns {
        let selected = btn.get_attribute("data-filter").as_deref() == Some(filter.as_str());
        dom::toggle_class(btn, "active", selected);
    }
    for card in dom::query_all(".project-card") {
        if filter.matches(card.get_attribute("data-category").as_deref()) {
            dom::set_style(&card, "display", "block");
            dom::set_style(&card, "animation", "fadeIn 0.5s ease-in-out");
        } else {
            dom::set_style(&card, "display", "none");
        }
    }
}

fn start_submission(els: &Elements, message: ContactMessage) {
    let delay = state::config().timings.submit_delay_ms;
    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        debug!(delay, "simulating contact submission");
        let outcome = simulate_submission(&message, TimeoutFuture::new(delay)).await;
        dispatch(&els, Command::SubmissionFinished(outcome));
    });
}
