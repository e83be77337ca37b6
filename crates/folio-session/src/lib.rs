//! Visitor interaction for the portfolio page, modelled as commands in and
//! effects out so the whole flow runs without a browser.

pub mod contact;
pub mod nav;
pub mod session;
pub mod theme;

pub use contact::{ContactError, ContactForm, ContactMessage, SubmitError, simulate_submission};
pub use nav::{ProjectFilter, SectionPosition, active_section};
pub use session::{Command, Effect, NotificationId, Session, Severity};
pub use theme::{MemoryStore, PreferenceStore, Theme};
