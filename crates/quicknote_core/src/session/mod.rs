//! Edit-session policy shared by every UI front end.
//!
//! # Responsibility
//! - Decide which store call (if any) ends an edit session.
//!
//! # Invariants
//! - Existing notes are always updated on dismiss, even when blank.
//! - New notes are added only when trimmed title or text is non-empty.
//! - An explicit delete suppresses any save on dismiss.

pub mod edit_session;
