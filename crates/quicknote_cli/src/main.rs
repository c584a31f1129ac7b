//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `quicknote_core` linkage without any UI runtime.
//! - Drive one scripted edit session per policy branch and print the list.

use quicknote_core::{core_version, CoreConfig, EditSession, NoteStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig {
        log_dir: Some(std::env::temp_dir().join("quicknote-cli-logs")),
        ..CoreConfig::default()
    };
    let mut store = match config.bootstrap() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("quicknote_core bootstrap failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    store.subscribe(|change, notes| {
        log::info!(
            "event=cli_observe module=cli status=ok change={:?} count={}",
            change,
            notes.len()
        );
    });

    println!("quicknote_core version={}", core_version());

    let mut draft = EditSession::new_note();
    draft.set_title("Milk");
    println!("new note -> {:?}", draft.dismiss(&mut store));

    println!("blank note -> {:?}", EditSession::new_note().dismiss(&mut store));

    if let Some(first) = store.list().get_index(0).cloned() {
        let mut edit = EditSession::open(&first);
        edit.set_text("edited from the CLI");
        println!("edit first -> {:?}", edit.dismiss(&mut store));
    }

    print_list(&store);
    ExitCode::SUCCESS
}

fn print_list(store: &NoteStore) {
    for (offset, note) in store.list().iter().enumerate() {
        println!("{offset}: {} [{}]", note.list_label(), note.id());
    }
}
