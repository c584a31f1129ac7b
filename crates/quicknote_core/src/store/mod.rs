//! In-memory note storage with change notification.
//!
//! # Responsibility
//! - Own the single authoritative, ordered collection of notes.
//! - Publish every effective mutation to subscribed observers.
//!
//! # Invariants
//! - Insertion order is display order; nothing re-sorts the collection.
//! - Store contents live for the process only; nothing is persisted.

pub mod note_store;
