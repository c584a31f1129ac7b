//! Note store: ordered CRUD collection plus publish/subscribe.
//!
//! # Responsibility
//! - Provide add/delete/update/list entry points for the UI layer.
//! - Notify subscribers synchronously after each effective mutation.
//!
//! # Invariants
//! - Notes are keyed by `NoteId`; two stored notes never share an id.
//! - `delete`/`update` act only when the stored note with the caller's id is
//!   structurally equal to the caller's snapshot. Anything else is a no-op.
//! - No-op operations do not notify subscribers.
//! - Log lines carry ids and counts only, never titles or bodies.

use crate::model::note::{Note, NoteId};
use indexmap::IndexMap;
use log::debug;
use std::fmt::{Debug, Formatter};

const SEED_TITLE: &str = "Welcome to QuickNote";
const SEED_TEXT: &str = "Tap a note to edit it. Use + to add a new one, \
or open a note and press Delete to remove it.";

/// Kind of mutation published to subscribers, with the affected note id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    /// A new note was appended.
    Added(NoteId),
    /// Title/text of an existing note were replaced in place.
    Updated(NoteId),
    /// A note was removed.
    Deleted(NoteId),
}

impl StoreChange {
    /// Returns the id of the note affected by this change.
    pub fn note_id(&self) -> NoteId {
        match self {
            Self::Added(id) | Self::Updated(id) | Self::Deleted(id) => *id,
        }
    }
}

/// Handle returned by [`NoteStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Read-only, ordered view over the store contents.
#[derive(Clone, Copy)]
pub struct NotesView<'a> {
    notes: &'a IndexMap<NoteId, Note>,
}

impl<'a> NotesView<'a> {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates notes in display order.
    pub fn iter(&self) -> NotesIter<'a> {
        NotesIter {
            inner: self.notes.values(),
        }
    }

    /// Returns the note with `id`, if stored.
    pub fn get(&self, id: NoteId) -> Option<&'a Note> {
        self.notes.get(&id)
    }

    /// Returns the note rendered at display `offset`, if any.
    pub fn get_index(&self, offset: usize) -> Option<&'a Note> {
        self.notes.get_index(offset).map(|(_, note)| note)
    }

    /// Returns the display offset of the note with `id`, if stored.
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.get_index_of(&id)
    }

    /// Returns whether a structurally equal note is stored.
    pub fn contains(&self, note: &Note) -> bool {
        self.get(note.id()).is_some_and(|stored| stored == note)
    }

    /// Clones the current contents into an owned snapshot.
    pub fn to_vec(&self) -> Vec<Note> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for NotesView<'a> {
    type Item = &'a Note;
    type IntoIter = NotesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Display-order iterator returned by [`NotesView::iter`].
#[derive(Debug, Clone)]
pub struct NotesIter<'a> {
    inner: indexmap::map::Values<'a, NoteId, Note>,
}

impl<'a> Iterator for NotesIter<'a> {
    type Item = &'a Note;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for NotesIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for NotesIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Debug for NotesView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

type Subscriber = Box<dyn FnMut(StoreChange, NotesView<'_>)>;

/// Single authoritative in-memory note collection.
///
/// Constructed once by the application root and passed down by reference.
/// Subscribers are plain callbacks; the store is meant for one thread.
pub struct NoteStore {
    notes: IndexMap<NoteId, Note>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl NoteStore {
    /// Creates a store holding the built-in example note.
    pub fn new() -> Self {
        Self::with_seed(Some(Self::example_note()))
    }

    /// Creates a store with no notes.
    pub fn empty() -> Self {
        Self::with_seed(None)
    }

    /// Creates a store holding `seed` as its only note, when provided.
    pub fn with_seed(seed: Option<Note>) -> Self {
        let mut notes = IndexMap::new();
        if let Some(note) = seed {
            notes.insert(note.id(), note);
        }
        debug!(
            "event=store_init module=store status=ok count={}",
            notes.len()
        );
        Self {
            notes,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Builds the example note shown on first launch.
    pub fn example_note() -> Note {
        Note::new(SEED_TITLE, SEED_TEXT)
    }

    /// Appends a new note with a fresh id and returns that id.
    ///
    /// No validation: blank notes are stored when asked to. Deciding whether
    /// to call this belongs to the caller (see `EditSession`).
    pub fn add(&mut self, title: impl Into<String>, text: impl Into<String>) -> NoteId {
        let note = Note::new(title, text);
        let id = note.id();
        self.notes.insert(id, note);
        debug!(
            "event=note_add module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        self.notify(StoreChange::Added(id));
        id
    }

    /// Removes the stored note equal to `note`.
    ///
    /// Returns `false` (and changes nothing) when no such note is stored.
    pub fn delete(&mut self, note: &Note) -> bool {
        if !self.list().contains(note) {
            debug!(
                "event=note_delete module=store status=noop note_id={}",
                note.id()
            );
            return false;
        }

        let id = note.id();
        self.notes.shift_remove(&id);
        debug!(
            "event=note_delete module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        self.notify(StoreChange::Deleted(id));
        true
    }

    /// Replaces title and text of the stored note equal to `note`.
    ///
    /// Id and position are preserved. Returns `false` (and changes nothing)
    /// when no such note is stored.
    pub fn update(
        &mut self,
        note: &Note,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> bool {
        let id = note.id();
        let Some(stored) = self.notes.get_mut(&id).filter(|stored| **stored == *note) else {
            debug!("event=note_update module=store status=noop note_id={id}");
            return false;
        };

        stored.set_title(title);
        stored.set_text(text);
        debug!("event=note_update module=store status=ok note_id={id}");
        self.notify(StoreChange::Updated(id));
        true
    }

    /// Deletes the notes rendered at display `offsets`.
    ///
    /// Offsets are resolved against the current order before anything is
    /// removed. Out-of-range and repeated offsets are ignored. Returns the
    /// number of removed notes.
    pub fn delete_at(&mut self, offsets: &[usize]) -> usize {
        let targets: Vec<Note> = offsets
            .iter()
            .filter_map(|&offset| self.list().get_index(offset).cloned())
            .collect();

        targets.iter().filter(|note| self.delete(note)).count()
    }

    /// Returns the current notes in display order.
    pub fn list(&self) -> NotesView<'_> {
        NotesView { notes: &self.notes }
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Registers `subscriber`, called after every effective mutation with the
    /// change and the updated contents.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(StoreChange, NotesView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        debug!(
            "event=store_subscribe module=store status=ok subscribers={}",
            self.subscribers.len()
        );
        id
    }

    /// Removes a subscriber. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(current, _)| *current != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        let view = NotesView { notes: &self.notes };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change, view);
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for NoteStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.list())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
