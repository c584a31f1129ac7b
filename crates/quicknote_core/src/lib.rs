//! Core domain logic for QuickNote.
//! This crate is the single source of truth for the note list and its
//! edit policy; UI layers only render and forward user actions.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use session::edit_session::{EditSession, SessionOutcome};
pub use store::note_store::{NoteStore, NotesIter, NotesView, StoreChange, SubscriptionId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
