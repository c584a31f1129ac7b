//! Edit session over one note (or a blank form).
//!
//! An `EditSession` models the detail screen: it is opened on an existing
//! note or on an empty form, buffers title/text edits, and on dismiss applies
//! the save policy to the store.

use crate::model::note::{is_blank_content, Note, NoteId};
use crate::store::note_store::NoteStore;
use log::debug;

/// What a finished session did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A new note was appended with this id.
    Added(NoteId),
    /// `update` was called for the opened note. `applied` is `false` when the
    /// note was no longer stored as opened.
    Updated { applied: bool },
    /// A new-note form was dismissed blank; nothing was stored.
    Discarded,
    /// The session ended through an explicit delete; no save happened.
    Deleted,
}

/// Buffered edits for one detail-screen visit.
///
/// Not `Clone`: `dismiss` consumes the session, so it applies at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct EditSession {
    original: Option<Note>,
    title: String,
    text: String,
    deleted: bool,
}

impl EditSession {
    /// Opens an empty form for a note that does not exist yet.
    pub fn new_note() -> Self {
        Self {
            original: None,
            title: String::new(),
            text: String::new(),
            deleted: false,
        }
    }

    /// Opens an existing note, pre-filling title and text.
    ///
    /// The session keeps the note as it was when opened; that snapshot is
    /// what `update`/`delete` are matched against.
    pub fn open(note: &Note) -> Self {
        Self {
            original: Some(note.clone()),
            title: note.title().to_string(),
            text: note.text().to_string(),
            deleted: false,
        }
    }

    /// Returns `true` for sessions started with [`EditSession::new_note`].
    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    /// The note this session was opened on, if any.
    pub fn original(&self) -> Option<&Note> {
        self.original.as_ref()
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

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Deletes the opened note right away and suppresses the save on dismiss.
    ///
    /// For a new-note form nothing is stored yet, so only the suppression
    /// applies.
    pub fn delete(&mut self, store: &mut NoteStore) {
        if let Some(note) = self.original.as_ref() {
            store.delete(note);
        }
        self.deleted = true;
    }

    /// Ends the session and applies the save policy.
    pub fn dismiss(self, store: &mut NoteStore) -> SessionOutcome {
        if self.deleted {
            debug!("event=session_dismiss module=session status=ok outcome=deleted");
            return SessionOutcome::Deleted;
        }

        let outcome = match self.original {
            Some(note) => SessionOutcome::Updated {
                applied: store.update(&note, self.title, self.text),
            },
            None if is_blank_content(&self.title, &self.text) => SessionOutcome::Discarded,
            None => SessionOutcome::Added(store.add(self.title, self.text)),
        };
        debug!(
            "event=session_dismiss module=session status=ok outcome={}",
            outcome.label()
        );
        outcome
    }
}

impl SessionOutcome {
    fn label(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Updated { applied: true } => "updated",
            Self::Updated { applied: false } => "update_noop",
            Self::Discarded => "discarded",
            Self::Deleted => "deleted",
        }
    }
}
