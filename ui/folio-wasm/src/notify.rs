//! Notification banners.
//!
//! A banner starts off-screen, slides in, and leaves either when closed or
//! when its lifetime runs out. Both exits go through the session so a banner
//! is only removed once.

use crate::dom::{self, Elements};
use crate::effects;
use crate::state;
use folio_session::{Command, NotificationId, Severity};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const ID_ATTR: &str = "data-notification-id";

fn banner(id: NotificationId) -> Option<web_sys::Element> {
    dom::query(&format!("[{ID_ATTR}=\"{id}\"]"))
}

pub fn show(els: &Elements, id: NotificationId, severity: Severity, message: &str) {
    let doc = dom::document();
    let Ok(notification) = doc.create_element("div") else {
        return;
    };
    notification.set_class_name(&format!("notification notification-{}", severity.as_str()));
    let _ = notification.set_attribute(ID_ATTR, &id.to_string());
    notification.set_inner_html(
        r#"
            <div class="notification-content">
                <span class="notification-message"></span>
                <button class="notification-close">&times;</button>
            </div>
        "#,
    );
    if let Ok(Some(text)) = notification.query_selector(".notification-message") {
        text.set_text_content(Some(message));
    }
    let _ = notification.set_attribute(
        "style",
        &format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 0.5rem; box-shadow: 0 4px 15px rgba(0,0,0,0.2); \
             z-index: 10000; transform: translateX(100%); transition: transform 0.3s ease; \
             max-width: 400px;",
            severity.background()
        ),
    );
    let _ = els.body.append_child(&notification);

    let timings = state::config().timings;

    let sliding = notification.clone();
    Timeout::new(timings.notification_slide_in_ms, move || {
        dom::set_style(&sliding, "transform", "translateX(0)");
    })
    .forget();

    if let Ok(Some(close)) = notification.query_selector(".notification-close") {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            effects::dispatch(&els2, Command::DismissNotification(id));
        }) as Box<dyn FnMut(_)>);
        let _ = close.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    let els2 = els.clone();
    Timeout::new(timings.notification_lifetime_ms, move || {
        effects::dispatch(&els2, Command::NotificationExpired(id));
    })
    .forget();
}

/// Slide the banner out, then detach it.
pub fn slide_out(id: NotificationId) {
    let Some(notification) = banner(id) else {
        return;
    };
    dom::set_style(&notification, "transform", "translateX(100%)");
    let delay = state::config().timings.notification_slide_out_ms;
    Timeout::new(delay, move || notification.remove()).forget();
}
