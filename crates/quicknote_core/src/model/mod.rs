//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, session and UI.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Title/text edits never change identity.

pub mod note;
