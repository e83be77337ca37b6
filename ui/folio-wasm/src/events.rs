//! Event binding.
//!
//! Turns DOM events into session commands. Call [`bind_events`] once, after
//! the first render, so anchors inside rendered sections are wired too.

use crate::dom::{self, Elements};
use crate::effects::dispatch;
use crate::state;
use folio_session::{Command, ContactForm, ProjectFilter, SectionPosition};
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, FormData, HtmlElement, HtmlImageElement};

/// Marks an image that already fell back once.
const FALLBACK_USED: &str = "data-fallback-used";

/// Helper: attach a click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let _ = $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }};
}

pub fn bind_events(els: &Elements) {
    // ── Theme ──
    if let Some(toggle) = &els.theme_toggle {
        let els2 = els.clone();
        on_click!(toggle, move |_: web_sys::MouseEvent| {
            dispatch(&els2, Command::ToggleTheme);
        });
    }

    // ── Mobile menu ──
    if let Some(toggle) = &els.nav_toggle {
        let els2 = els.clone();
        on_click!(toggle, move |_: web_sys::MouseEvent| {
            dispatch(&els2, Command::ToggleMenu);
        });
    }
    for link in &els.menu_links {
        let els2 = els.clone();
        on_click!(link, move |_: web_sys::MouseEvent| {
            dispatch(&els2, Command::NavLinkActivated);
        });
    }

    // ── In-page anchors ──
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let els2 = els.clone();
        let target = anchor.get_attribute("href").unwrap_or_default();
        on_click!(anchor, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let exists = dom::query(&target).is_some();
            dispatch(
                &els2,
                Command::FollowAnchor {
                    target: target.clone(),
                    exists,
                },
            );
        });
    }

    // ── Project filter ──
    for btn in &els.filter_btns {
        let els2 = els.clone();
        let filter = btn.get_attribute("data-filter").unwrap_or_default();
        on_click!(btn, move |_: web_sys::MouseEvent| {
            dispatch(&els2, Command::SelectFilter(ProjectFilter::parse(&filter)));
        });
    }

    // ── Testimonials ──
    if let Some(prev) = &els.prev_testimonial {
        let els2 = els.clone();
        on_click!(prev, move |_: web_sys::MouseEvent| {
            dispatch(&els2, Command::PreviousTestimonial);
        });
    }
    if let Some(next) = &els.next_testimonial {
        let els2 = els.clone();
        on_click!(next, move |_: web_sys::MouseEvent| {
            dispatch(&els2, Command::NextTestimonial);
        });
    }

    // ── Contact form ──
    if let Some(form) = &els.contact_form {
        let els2 = els.clone();
        let form2 = form.clone();
        let cb = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            dispatch(&els2, Command::SubmitContact(read_form(&form2)));
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // ── Active section on scroll ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: Event| {
            let offset = dom::window().scroll_y().unwrap_or(0.0);
            dispatch(
                &els2,
                Command::Scrolled {
                    offset,
                    sections: section_positions(),
                },
            );
        }) as Box<dyn FnMut(_)>);
        let _ = dom::window().add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn read_form(form: &web_sys::HtmlFormElement) -> ContactForm {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactForm::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactForm {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    }
}

fn section_positions() -> Vec<SectionPosition> {
    dom::query_all("section[id]")
        .into_iter()
        .map(|section| SectionPosition {
            top: section
                .dyn_ref::<HtmlElement>()
                .map_or(0.0, |html| f64::from(html.offset_top())),
            id: section.id(),
        })
        .collect()
}

/// Images that fail to load switch to their `data-fallback-src` once, and
/// are hidden when there is none or the fallback fails too.
pub fn bind_image_fallbacks() {
    let cb = Closure::wrap(Box::new(move |e: Event| {
        let Some(img) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        match img.get_attribute("data-fallback-src") {
            Some(fallback) if !img.has_attribute(FALLBACK_USED) => {
                let _ = img.set_attribute(FALLBACK_USED, "");
                img.set_src(&fallback);
            }
            _ => {
                let _ = img.style().set_property("display", "none");
            }
        }
    }) as Box<dyn FnMut(_)>);
    let opts = AddEventListenerOptions::new();
    opts.set_capture(true);
    let _ = dom::document().add_event_listener_with_callback_and_add_event_listener_options(
        "error",
        cb.as_ref().unchecked_ref(),
        &opts,
    );
    cb.forget();
}

/// Auto-advance the carousel for the page's lifetime when there is more
/// than one testimonial. Manual navigation does not reset it.
pub fn start_rotation(els: &Elements) {
    let Some(period) = state::rotation_interval_ms() else {
        return;
    };
    let els = els.clone();
    Interval::new(period, move || dispatch(&els, Command::RotateTestimonial)).forget();
}
