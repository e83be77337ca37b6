//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Borrows never outlive a single accessor call, so effects can be applied
//! (and can dispatch again) without holding the cell.

use folio_session::{Command, Effect, PreferenceStore, Session};
use folio_types::{PortfolioDocument, SiteConfig};
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;

/// Theme preference in `localStorage`, stored as the bare string so pages
/// written before this front end keep their setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, error = ?err, "could not persist preference");
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub config: SiteConfig,
    pub document: PortfolioDocument,
    pub session: Option<Session<LocalStore>>,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}

pub fn document() -> PortfolioDocument {
    with(|s| s.document.clone())
}

/// Create the session and return its start-up effects.
pub fn open_session(config: SiteConfig) -> Vec<Effect> {
    let session = Session::new(&config, &PortfolioDocument::default(), LocalStore);
    let effects = session.start();
    with_mut(|s| {
        s.config = config;
        s.session = Some(session);
    });
    effects
}

pub fn set_document(document: PortfolioDocument) {
    with_mut(|s| {
        if let Some(session) = s.session.as_mut() {
            session.set_document(&document);
        }
        s.document = document;
    });
}

pub fn handle(command: Command) -> Vec<Effect> {
    with_mut(|s| {
        s.session
            .as_mut()
            .map(|session| session.handle(command))
            .unwrap_or_default()
    })
}

pub fn rotation_interval_ms() -> Option<u32> {
    with(|s| s.session.as_ref().and_then(|session| session.rotation_interval_ms()))
}
