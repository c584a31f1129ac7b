//! Note domain model.
//!
//! # Responsibility
//! - Define the title + text record rendered by list and detail screens.
//! - Provide the blank-check used by the edit-session save policy.
//!
//! # Invariants
//! - `id` is assigned once and never changes for the note lifetime.
//! - Equality is structural: `id`, `title` and `text` must all match.
//! - Empty title/text is a legal value; construction never fails.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// One note: stable identity plus editable title and body text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    text: String,
}

impl Note {
    /// Creates a note with a freshly generated id.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, text)
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used when identity already exists elsewhere (fixtures, host-side
    /// seeds). Uniqueness inside a store is the caller's responsibility.
    pub fn with_id(id: NoteId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns whether both title and text are empty after trimming
    /// leading/trailing whitespace and newlines.
    pub fn is_blank(&self) -> bool {
        is_blank_content(&self.title, &self.text)
    }

    /// Single-line label for list rows: the first line of the title.
    pub fn list_label(&self) -> &str {
        self.title.lines().next().unwrap_or("")
    }
}

/// Blank-check shared by [`Note::is_blank`] and unsaved edit buffers.
pub(crate) fn is_blank_content(title: &str, text: &str) -> bool {
    title.trim().is_empty() && text.trim().is_empty()
}
