//! DOM helpers and element bindings.
//!
//! Page elements are resolved once at start-up into [`Elements`]. Every
//! control is optional: a page that omits one simply loses that feature.

use anyhow::Context;
use folio_render::Surface;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// First match for `selector`. An invalid selector matches nothing.
pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Set an inline style property. Non-HTML elements are ignored.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

// ── Elements struct ──

/// Page controls the interaction layer listens to or updates.
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    pub navbar: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    /// `.nav-link` entries, highlighted while scrolling.
    pub nav_links: Vec<Element>,
    /// Every link inside the menu; each one closes it.
    pub menu_links: Vec<Element>,
    pub filter_btns: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub prev_testimonial: Option<Element>,
    pub next_testimonial: Option<Element>,
}

impl Elements {
    /// Resolve the page controls. Only `<body>` is mandatory.
    pub fn bind() -> anyhow::Result<Elements> {
        Ok(Elements {
            body: document().body().context("document has no <body>")?,
            navbar: query(".navbar"),
            theme_toggle: by_id("themeToggle"),
            nav_toggle: query(".nav-toggle"),
            nav_menu: query(".nav-menu"),
            nav_links: query_all(".nav-link"),
            menu_links: query_all(".nav-menu a"),
            filter_btns: query_all(".filter-btn"),
            contact_form: by_id_typed("contactForm"),
            prev_testimonial: by_id("prevTestimonial"),
            next_testimonial: by_id("nextTestimonial"),
        })
    }
}

// ── Render surface ──

/// Live page as a render target. Regions are looked up on every write, so a
/// region added later by script is picked up too.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurface;

impl Surface for DomSurface {
    fn has_region(&self, selector: &str) -> bool {
        query(selector).is_some()
    }

    fn set_text(&mut self, selector: &str, text: &str) {
        if let Some(el) = query(selector) {
            el.set_text_content(Some(text));
        }
    }

    fn set_href(&mut self, selector: &str, url: &str) {
        if let Some(el) = query(selector) {
            let _ = el.set_attribute("href", url);
        }
    }

    fn set_markup(&mut self, selector: &str, markup: &str) {
        if let Some(el) = query(selector) {
            el.set_inner_html(markup);
        }
    }

    fn set_title(&mut self, title: &str) {
        document().set_title(title);
    }
}
