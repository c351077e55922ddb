//! Tests for the to-do commands against a real store file.

use parlor::todo::{self, TodoAction, TodoStore};

fn run(store: &TodoStore, action: TodoAction) -> String {
    let mut out = Vec::new();
    todo::execute(&action, store, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_commands_persist_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::new(dir.path().join("todo.json"));

    assert_eq!(run(&store, TodoAction::View), "No tasks available.\n");
    assert_eq!(
        run(&store, TodoAction::Add("write report".into())),
        "Added task: write report\n"
    );
    assert_eq!(
        run(&store, TodoAction::Add("file taxes".into())),
        "Added task: file taxes\n"
    );
    assert_eq!(
        run(&store, TodoAction::Complete(0)),
        "Marked task as completed: write report\n"
    );
    assert_eq!(
        run(&store, TodoAction::View),
        "0: write report [Done]\n1: file taxes [Pending]\n"
    );
    assert_eq!(
        run(&store, TodoAction::Remove(0)),
        "Removed task: write report\n"
    );
    assert_eq!(run(&store, TodoAction::View), "0: file taxes [Pending]\n");
}

#[test]
fn test_out_of_range_reports_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::new(dir.path().join("todo.json"));
    run(&store, TodoAction::Add("only".into()));
    let before = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(
        run(&store, TodoAction::Remove(3)),
        "Task index 3 is out of range.\n"
    );
    assert_eq!(
        run(&store, TodoAction::Complete(1)),
        "Task index 1 is out of range.\n"
    );
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_view_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::new(dir.path().join("todo.json"));
    run(&store, TodoAction::View);
    assert!(!store.path().exists());
}

#[test]
fn test_corrupt_store_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.json");
    std::fs::write(&path, "not json").unwrap();

    let store = TodoStore::new(path);
    let mut out = Vec::new();
    let err = todo::execute(&TodoAction::View, &store, &mut out).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse"), "{err}");
}
