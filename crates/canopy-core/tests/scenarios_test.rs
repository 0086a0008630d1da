//! Integration tests for the forest and editor scenarios.
//!
//! Exercises the public API only: registry sharing through a forest, and the
//! editor/history undo flow.

use canopy_core::{
    CanopyConfig, CanopyError, ErrorCode, Forest, History, Originator, Registry, SnapshotStore,
    TextEditor, TreeKind, TreeKindKey,
};

/// Oak at (1,1) and (3,5) share a kind; Pine gets its own.
#[test]
fn test_forest_shares_identical_kinds() {
    let mut forest = Forest::new();
    let oak_a = forest.plant(1, 1, "Oak", "Green", "Rough");
    let pine = forest.plant(2, 3, "Pine", "Dark Green", "Smooth");
    let oak_b = forest.plant(3, 5, "Oak", "Green", "Rough");

    assert_eq!(oak_a, oak_b);
    assert_ne!(oak_a, pine);
    assert_eq!(forest.kinds().len(), 2);

    let stats = forest.kinds().stats();
    assert_eq!((stats.lookups, stats.hits, stats.misses), (3, 1, 2));

    let lines = forest.render();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[2],
        "Displaying 'Oak' tree at (3, 5) with color Green and texture Rough."
    );
}

/// Keys that would collide as "a-b-c" labels stay distinct records.
#[test]
fn test_registry_structural_keys() {
    let mut registry: Registry<TreeKind> = Registry::new();
    let first = registry.get_or_create(TreeKindKey::new("a-b", "c", "x"));
    let second = registry.get_or_create(TreeKindKey::new("a", "b-c", "x"));
    assert_ne!(first, second);

    let err = registry.label(first).unwrap_err();
    assert_eq!(err.code(), ErrorCode::KeyContainsSeparator);

    let custom = CanopyConfig::builder().key_separator('/').build();
    let mut registry: Registry<TreeKind> = Registry::with_config(&custom.registry);
    let handle = registry.get_or_create(TreeKindKey::new("a-b", "c", "x"));
    assert_eq!(registry.label(handle).unwrap().as_deref(), Some("a-b/c/x"));
}

/// The editor undo flow: save twice, restore the first, history unchanged.
#[test]
fn test_editor_undo_scenario() {
    let mut editor = TextEditor::new();
    let mut history = History::new();
    assert_eq!(editor.text(), "");

    editor.set_text("Hello, World!");
    let a = editor.save();
    history.record(a.clone());

    editor.set_text("This is a new text.");
    let b = editor.save();
    history.record(b.clone());

    editor.restore(&a);
    assert_eq!(editor.text(), "Hello, World!");

    editor.restore(&a);
    assert_eq!(editor.text(), "Hello, World!");

    assert_eq!(history.len(), 2);
    assert_eq!(history.get(0).unwrap(), &a);
    assert_eq!(history.get(1).unwrap().state().text, "This is a new text.");

    editor.set_text("scratch");
    assert_eq!(history.get(0).unwrap().state().text, "Hello, World!");
}

#[test]
fn test_history_out_of_range() {
    let mut editor = TextEditor::new();
    let mut history = History::new();
    history.record(editor.save());
    editor.set_text("x");
    history.record(editor.save());

    let n = history.len() as isize;
    for index in [-1, n] {
        match history.get(index) {
            Err(CanopyError::IndexOutOfRange { index: i, len, .. }) => {
                assert_eq!(i, index);
                assert_eq!(len, 2);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn test_history_with_configured_forest_and_editor() {
    let config = CanopyConfig::builder()
        .registry_capacity(1)
        .history_capacity(1)
        .build();

    let mut forest = Forest::with_config(&config);
    for x in 0..10 {
        forest.plant(x, x, "Oak", "Green", "Rough");
    }
    assert_eq!(forest.kinds().len(), 1);

    let mut editor = TextEditor::new();
    let mut history = History::with_config(&config.history);
    for i in 0..10 {
        editor.set_text(format!("rev {}", i));
        history.record(editor.save());
    }
    history.restore_into(3, &mut editor).unwrap();
    assert_eq!(editor.text(), "rev 3");
    assert_eq!(history.summary().unwrap().total, 10);
}
