use quicknote_core::{Note, NoteStore, StoreChange};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn titles(store: &NoteStore) -> Vec<String> {
    store.list().iter().map(|note| note.title().to_string()).collect()
}

#[test]
fn new_store_starts_with_one_seed_note() {
    let store = NoteStore::new();
    assert_eq!(store.len(), 1);
    assert!(!store.is_empty());
    assert!(NoteStore::empty().is_empty());
}

#[test]
fn list_keeps_insertion_order_with_seed_first() {
    let mut store = NoteStore::new();
    let seed_id = store.list().get_index(0).unwrap().id();

    store.add("one", "");
    store.add("two", "");
    store.add("three", "");

    let listed = store.list();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed.get_index(0).unwrap().id(), seed_id);
    assert_eq!(titles(&store)[1..], ["one", "two", "three"]);
}

#[test]
fn add_always_assigns_unique_ids_even_for_duplicate_content() {
    let mut store = NoteStore::new();
    let first = store.add("dup", "dup");
    let second = store.add("dup", "dup");

    assert_ne!(first, second);
    let ids: HashSet<_> = store.list().iter().map(Note::id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn add_stores_blank_notes_without_validation() {
    let mut store = NoteStore::empty();
    let id = store.add("", "");
    assert!(store.get(id).unwrap().is_blank());
}

#[test]
fn delete_removes_exactly_one_and_repeat_is_noop() {
    let mut store = NoteStore::new();
    let id = store.add("to delete", "body");
    store.add("keep", "body");
    let target = store.get(id).unwrap().clone();

    assert!(store.delete(&target));
    assert_eq!(store.len(), 2);
    assert!(store.get(id).is_none());

    assert!(!store.delete(&target));
    assert_eq!(store.len(), 2);
}

#[test]
fn delete_distinguishes_notes_with_identical_content() {
    let mut store = NoteStore::empty();
    let first = store.add("twin", "same");
    let second = store.add("twin", "same");
    let second_note = store.get(second).unwrap().clone();

    assert!(store.delete(&second_note));
    assert_eq!(store.len(), 1);
    assert!(store.get(first).is_some());
}

#[test]
fn update_changes_only_target_and_keeps_id_and_position() {
    let mut store = NoteStore::new();
    store.add("a", "1");
    let target_id = store.add("b", "2");
    store.add("c", "3");
    let before = store.list().to_vec();
    let target = store.get(target_id).unwrap().clone();

    assert!(store.update(&target, "b2", "22"));

    let after = store.list().to_vec();
    assert_eq!(after.len(), before.len());
    assert_eq!(store.list().position(target_id), Some(2));
    let updated = store.get(target_id).unwrap();
    assert_eq!(updated.title(), "b2");
    assert_eq!(updated.text(), "22");
    for (old, new) in before.iter().zip(after.iter()) {
        if old.id() != target_id {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn update_and_delete_on_absent_note_leave_store_unchanged() {
    let mut store = NoteStore::new();
    store.add("present", "");
    let before = store.list().to_vec();
    let stranger = Note::new("present", "");

    assert!(!store.update(&stranger, "x", "y"));
    assert!(!store.delete(&stranger));
    assert_eq!(store.list().to_vec(), before);
}

#[test]
fn stale_snapshot_is_treated_as_absent() {
    let mut store = NoteStore::empty();
    let id = store.add("v1", "");
    let stale = store.get(id).unwrap().clone();
    assert!(store.update(&stale, "v2", ""));

    assert!(!store.update(&stale, "v3", ""));
    assert!(!store.delete(&stale));
    assert_eq!(store.get(id).unwrap().title(), "v2");
}

#[test]
fn delete_at_resolves_offsets_before_removing() {
    let mut store = NoteStore::empty();
    store.add("a", "");
    store.add("b", "");
    store.add("c", "");
    store.add("d", "");

    let removed = store.delete_at(&[1, 3, 3, 9]);
    assert_eq!(removed, 2);
    assert_eq!(titles(&store), ["a", "c"]);
}

#[test]
fn subscribers_see_each_effective_change_with_updated_contents() {
    let mut store = NoteStore::new();
    let seen: Rc<RefCell<Vec<(StoreChange, usize)>>> = Rc::default();
    let sink = Rc::clone(&seen);
    store.subscribe(move |change, notes| sink.borrow_mut().push((change, notes.len())));

    let id = store.add("new", "");
    let note = store.get(id).unwrap().clone();
    store.update(&note, "renamed", "");
    let renamed = store.get(id).unwrap().clone();
    store.delete(&renamed);

    assert_eq!(
        *seen.borrow(),
        vec![
            (StoreChange::Added(id), 2),
            (StoreChange::Updated(id), 2),
            (StoreChange::Deleted(id), 1),
        ]
    );
}

#[test]
fn subscriber_view_reflects_state_after_mutation() {
    let mut store = NoteStore::empty();
    let titles_seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let sink = Rc::clone(&titles_seen);
    store.subscribe(move |_, notes| {
        sink.borrow_mut()
            .push(notes.iter().map(|n| n.title().to_string()).collect());
    });

    store.add("first", "");
    store.add("second", "");

    assert_eq!(
        *titles_seen.borrow(),
        vec![vec!["first".to_string()], vec!["first".to_string(), "second".to_string()]]
    );
}

#[test]
fn noop_operations_do_not_notify() {
    let mut store = NoteStore::new();
    let count = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&count);
    store.subscribe(move |_, _| *sink.borrow_mut() += 1);

    let stranger = Note::new("ghost", "");
    store.update(&stranger, "x", "");
    store.delete(&stranger);
    store.delete_at(&[42]);

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let mut store = NoteStore::new();
    let first = Rc::new(RefCell::new(0_usize));
    let second = Rc::new(RefCell::new(0_usize));
    let first_sink = Rc::clone(&first);
    let second_sink = Rc::clone(&second);
    let handle = store.subscribe(move |_, _| *first_sink.borrow_mut() += 1);
    store.subscribe(move |_, _| *second_sink.borrow_mut() += 1);

    store.add("one", "");
    assert!(store.unsubscribe(handle));
    store.add("two", "");

    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 2);
}

#[test]
fn list_iterator_is_exact_size_and_reversible() {
    let mut store = NoteStore::empty();
    store.add("a", "");
    store.add("b", "");
    store.add("c", "");

    let mut iter = store.list().iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next().map(|note| note.title()), Some("a"));
    assert_eq!(iter.len(), 2);

    let reversed: Vec<&str> = store.list().into_iter().rev().map(|note| note.title()).collect();
    assert_eq!(reversed, ["c", "b", "a"]);
}
