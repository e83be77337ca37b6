//! Folio portfolio page front end.
//!
//! Loads the portfolio document, renders it into the page and wires the
//! interaction layer. Each concern lives in its own module.

pub mod api;
pub mod dom;
pub mod effects;
pub mod events;
pub mod logging;
pub mod notify;
pub mod observe;
pub mod state;

use anyhow::Context;
use folio_loader::load_or_default;
use folio_render::{render, render_languages};
use gloo_timers::callback::Timeout;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init()
        .await
        .map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

/// Start-up: restore theme, load, render, then bind interactions.
async fn init() -> anyhow::Result<()> {
    let (config, config_error) = api::read_config();
    logging::init(&config.log_level);
    if let Some(error) = config_error {
        warn!(%error, "ignoring invalid #folioConfig");
    }

    let els = dom::Elements::bind()?;
    effects::apply(&els, state::open_session(config.clone()));

    let source = api::FetchSource::from_config(&config);
    let loaded = load_or_default(&source, config.edition).await;
    let report = render(&loaded.document, &mut dom::DomSurface, &config);
    debug!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "page rendered"
    );
    state::set_document(loaded.document);

    dom::add_class(&els.body, "loaded");
    events::bind_image_fallbacks();
    events::bind_events(&els);
    events::start_rotation(&els);
    observe::watch_blocks(&els, observe::ANIMATED_BLOCKS).context("entrance animation")?;
    observe::watch_lazy_images().context("lazy images")?;
    schedule_languages_refresh(&els, config.timings.languages_refresh_ms);

    info!(origin = ?loaded.origin, "portfolio ready");
    Ok(())
}

/// Render the languages chart a second time once layout has settled.
fn schedule_languages_refresh(els: &dom::Elements, delay_ms: u32) {
    let els = els.clone();
    Timeout::new(delay_ms, move || {
        let doc = state::document();
        if doc.languages().is_none() {
            return;
        }
        render_languages(&doc, &mut dom::DomSurface, &state::config());
        if let Err(err) = observe::watch_blocks(&els, ".language-item") {
            warn!(error = %err, "languages chart not animated");
        }
    })
    .forget();
}
