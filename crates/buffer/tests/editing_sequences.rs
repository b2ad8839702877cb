// Chunk: docs/chunks/line_store - Committed lines plus the editable current line

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the length cap and the commit/merge-up pair
//! hold up through longer mixes of typing, indenting and deleting.

use code_window_buffer::{EditOutcome, Line, LineStore, Segment};

const MAX: usize = 60;

fn whole(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        Vec::new()
    } else {
        // Split into single-character segments so reconstruction is exercised
        text.chars().map(|c| Segment::plain(c.to_string())).collect()
    }
}

fn type_str(store: &mut LineStore, text: &str) {
    for ch in text.chars() {
        store.push_char(ch);
    }
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut store = LineStore::new(Vec::new(), 0, MAX);
    type_str(&mut store, "hello");
    assert_eq!(store.current_text(), "hello");

    for _ in 0..5 {
        assert_eq!(store.delete_backward(), EditOutcome::CurrentLineChanged);
    }
    assert_eq!(store.current_text(), "");
    assert_eq!(store.delete_backward(), EditOutcome::Unchanged);
}

#[test]
fn test_length_cap_holds_under_mixed_input() {
    let mut store = LineStore::new(Vec::new(), 0, MAX);
    for round in 0..200 {
        if round % 3 == 0 {
            store.indent();
        } else {
            store.push_char('x');
        }
        assert!(store.current_len() <= MAX);
        assert_eq!(store.current_len(), store.current_text().chars().count());
    }
    // The cap is reached, never exceeded
    assert!(store.current_len() >= MAX - 1);
}

#[test]
fn test_commit_then_backspace_restores_text() {
    let mut store = LineStore::new(Vec::new(), 0, MAX);
    for text in ["class Foo:", "  def bar(self):", "    return 'x'", ""] {
        type_str(&mut store, text);
        store.commit(whole);
        assert_eq!(store.delete_backward(), EditOutcome::MergedUp);
        assert_eq!(store.current_text(), text);
        // Commit again so the next round starts on a clean line
        store.commit(whole);
    }
    assert_eq!(store.committed().len(), 4);
}

#[test]
fn test_merge_up_then_keep_deleting_walks_back_through_lines() {
    let mut store = LineStore::new(Vec::new(), 0, MAX);
    type_str(&mut store, "ab");
    store.commit(whole);
    type_str(&mut store, "c");
    store.commit(whole);

    let mut outcomes = Vec::new();
    loop {
        let outcome = store.delete_backward();
        if outcome.is_unchanged() {
            break;
        }
        outcomes.push(outcome);
    }

    assert_eq!(
        outcomes,
        vec![
            EditOutcome::MergedUp,           // "c" back up
            EditOutcome::CurrentLineChanged, // delete 'c'
            EditOutcome::MergedUp,           // "ab" back up
            EditOutcome::CurrentLineChanged, // delete 'b'
            EditOutcome::CurrentLineChanged, // delete 'a'
        ]
    );
    assert!(store.committed().is_empty());
}

#[test]
fn test_merged_full_line_still_respects_cap() {
    let mut store = LineStore::new(Vec::new(), 0, MAX);
    type_str(&mut store, &"y".repeat(MAX));
    store.commit(whole);
    store.delete_backward();
    assert_eq!(store.current_len(), MAX);
    assert_eq!(store.push_char('z'), EditOutcome::Unchanged);
}

#[test]
fn test_prologue_survives_everything() {
    let prologue = vec![
        Line::prologue(vec![Segment::plain("line one")]),
        Line::prologue(vec![Segment::plain("line two")]),
    ];
    let mut store = LineStore::new(prologue.clone(), 2, MAX);
    type_str(&mut store, "z");
    store.commit(whole);
    for _ in 0..10 {
        store.delete_backward();
    }
    assert_eq!(store.prologue(), &prologue[..]);
}
