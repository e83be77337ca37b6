//! Viewport-driven effects: entrance animation, language bar fill and lazy
//! images.

use crate::dom::{self, Elements};
use crate::effects;
use anyhow::anyhow;
use folio_session::Command;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Blocks that fade and slide in the first time they are seen.
pub const ANIMATED_BLOCKS: &str =
    ".skill-category, .timeline-item, .project-card, .stat-item, .language-item";

const BLOCK_ATTR: &str = "data-reveal-id";

thread_local! {
    static NEXT_BLOCK: Cell<usize> = const { Cell::new(0) };
}

fn intersecting(entries: js_sys::Array) -> impl Iterator<Item = Element> {
    entries
        .to_vec()
        .into_iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .map(|entry| entry.target())
}

fn block(id: usize) -> Option<Element> {
    dom::query(&format!("[{BLOCK_ATTR}=\"{id}\"]"))
}

/// Hide every element matching `selector` and reveal each one as it scrolls
/// into view. Elements get fresh block ids, so re-rendered content can be
/// watched again.
pub fn watch_blocks(els: &Elements, selector: &str) -> anyhow::Result<()> {
    let targets = dom::query_all(selector);
    if targets.is_empty() {
        return Ok(());
    }

    let els = els.clone();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for target in intersecting(entries) {
                observer.unobserve(&target);
                let Some(block) = target.get_attribute(BLOCK_ATTR).and_then(|v| v.parse().ok())
                else {
                    continue;
                };
                let skill = dom::has_class(&target, "language-item")
                    .then(|| target.get_attribute("data-skill"))
                    .flatten();
                effects::dispatch(&els, Command::BlockEntered { block, skill });
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));
    init.set_root_margin("0px 0px -50px 0px");
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        .map_err(|e| anyhow!("cannot create entrance observer: {e:?}"))?;
    cb.forget();

    for el in targets {
        let id = NEXT_BLOCK.with(|next| next.replace(next.get() + 1));
        let _ = el.set_attribute(BLOCK_ATTR, &id.to_string());
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateY(30px)");
        dom::set_style(&el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(&el);
    }
    Ok(())
}

pub fn reveal(id: usize) {
    if let Some(el) = block(id) {
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "transform", "translateY(0)");
    }
}

/// Grow a language row's bar to `width` after `delay_ms`.
pub fn fill_bar(id: usize, width: String, delay_ms: u32) {
    let Some(item) = block(id) else {
        return;
    };
    let Ok(Some(bar)) = item.query_selector(".skill-progress") else {
        return;
    };
    dom::add_class(&item, "animate");
    Timeout::new(delay_ms, move || {
        dom::set_style(&bar, "--skill-width", &width);
        dom::add_class(&bar, "animate");
    })
    .forget();
}

/// Swap `data-src` into `src` once an image nears the viewport.
pub fn watch_lazy_images() -> anyhow::Result<()> {
    let images = dom::query_all("img[data-src]");
    if images.is_empty() {
        return Ok(());
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for img in intersecting(entries) {
                if let Some(src) = img.get_attribute("data-src") {
                    let _ = img.set_attribute("src", &src);
                }
                dom::remove_class(&img, "lazy");
                observer.unobserve(&img);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new(cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("cannot create image observer: {e:?}"))?;
    cb.forget();

    for img in images {
        observer.observe(&img);
    }
    Ok(())
}
