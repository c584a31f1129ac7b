//! Host-supplied bootstrap configuration.
//!
//! # Responsibility
//! - Carry the values a host passes in at startup (log level/dir, seeding).
//! - Build the application-root `NoteStore` from them.
//!
//! # Invariants
//! - No ambient lookups: every value comes from the host or `Default`.
//! - Logging is only started when `log_dir` is set.

use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use crate::store::note_store::NoteStore;
use serde::Deserialize;
use std::path::PathBuf;

/// Startup values supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Whether the store starts with the built-in example note.
    pub seed_example_note: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_example_note: true,
        }
    }
}

impl CoreConfig {
    /// Starts logging (when configured) and returns the root note store.
    ///
    /// `log_level` is validated even when file logging is disabled.
    pub fn bootstrap(&self) -> Result<NoteStore, LoggingError> {
        normalize_level(&self.log_level)?;
        if let Some(log_dir) = self.log_dir.as_deref() {
            init_logging(&self.log_level, log_dir)?;
        }

        let seed = self.seed_example_note.then(NoteStore::example_note);
        Ok(NoteStore::with_seed(seed))
    }
}
