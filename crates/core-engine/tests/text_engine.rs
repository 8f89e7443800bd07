use core_engine::{TextEngine, TextPosition, TextRange};
use pretty_assertions::assert_eq;

// Contains combining characters, so there are fewer clusters than chars.
const SNIPPET: [&str; 3] = [
    "a\u{0304}\u{0308}bc\u{0327}",
    "c\u{0327}ba\u{0304}\u{0308}",
    "bc\u{0327}a\u{0304}\u{0308}",
];

fn joined(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn perform_enter() {
    let mut engine = TextEngine::new(["foo", "bar"]);
    engine.set_cursor_position(TextPosition::new(1, 1), true);
    engine.perform_enter();

    assert_eq!(engine.line_count(), 3);
    assert_eq!(engine.to_string(), joined(&["foo", "b", "ar"]));
    assert_eq!(engine.current_position(), TextPosition::new(2, 0));
}

#[test]
fn delete_multi_line_selection() {
    let mut engine = TextEngine::new(["line 1", "line 2", "line 3"]);
    engine.set_cursor_position(TextPosition::new(0, 2), true);
    engine.perform_down(true);
    engine.perform_down(true);
    engine.perform_delete();

    assert_eq!(engine.line_count(), 1);
    assert_eq!(engine.to_string(), joined(&["line 3"]));
}

#[test]
fn delete_selection() {
    let mut engine = TextEngine::new(["это тест", "это еще один тест"]);
    engine.set_cursor_position(TextPosition::new(0, 2), true);
    engine.perform_down(true);
    engine.perform_delete();

    assert_eq!(engine.line_count(), 1);
    assert_eq!(engine.to_string(), joined(&["это еще один тест"]));
    assert_eq!(engine.current_position(), TextPosition::new(0, 2));
}

#[test]
fn backspace_join_lines() {
    let mut engine = TextEngine::new(["foo", "bar"]);
    engine.set_cursor_position(TextPosition::new(1, 0), true);
    engine.perform_backspace();

    assert_eq!(engine.line_count(), 1);
    assert_eq!(engine.to_string(), "foobar");
    assert_eq!(engine.current_position(), TextPosition::new(0, 3));
}

#[test]
fn backspace_over_combining_clusters() {
    let mut engine = TextEngine::new(SNIPPET);

    // End of a line.
    engine.set_cursor_position(TextPosition::new(0, 6), true);
    engine.perform_backspace();
    assert_eq!(engine.lines()[0], "a\u{0304}\u{0308}b");
    assert_eq!(engine.current_position(), TextPosition::new(0, 4));

    // First character of a line.
    engine.set_cursor_position(TextPosition::new(1, 2), true);
    engine.perform_backspace();
    assert_eq!(engine.lines()[1], "ba\u{0304}\u{0308}");
    assert_eq!(engine.current_position(), TextPosition::new(1, 0));

    // Middle of a line.
    engine.set_cursor_position(TextPosition::new(2, 3), true);
    engine.perform_backspace();
    assert_eq!(engine.lines()[2], "ba\u{0304}\u{0308}");
    assert_eq!(engine.current_position(), TextPosition::new(2, 1));
}

#[test]
fn perform_left_right() {
    let mut engine = TextEngine::new(SNIPPET);

    engine.set_cursor_position(TextPosition::new(0, 3), true);
    engine.perform_right(false, false);
    assert_eq!(engine.current_position(), TextPosition::new(0, 4));
    engine.perform_right(false, false);
    assert_eq!(engine.current_position(), TextPosition::new(0, 6));
    engine.perform_right(false, false);
    engine.perform_right(false, false);
    assert_eq!(engine.current_position(), TextPosition::new(1, 2));

    engine.perform_left(false, false);
    assert_eq!(engine.current_position(), TextPosition::new(1, 0));
    engine.perform_left(false, false);
    assert_eq!(engine.current_position(), TextPosition::new(0, 6));

    // Stays at the beginning / end when attempting to advance further.
    engine.set_cursor_position(TextPosition::new(0, 0), true);
    engine.perform_left(false, false);
    assert_eq!(engine.current_position(), TextPosition::new(0, 0));

    let end = TextPosition::new(SNIPPET.len() - 1, SNIPPET[2].chars().count());
    engine.set_cursor_position(end, true);
    engine.perform_right(false, false);
    assert_eq!(engine.current_position(), end);
}

#[test]
fn round_trip_serialization() {
    let lines = ["first", "", "  indented", "last \u{00E9}\u{0301}"];
    let engine = TextEngine::new(lines);
    assert_eq!(engine.to_string(), lines.join("\n"));
    assert_eq!(engine.lines(), lines);
}

#[test]
fn deleting_everything_leaves_one_line() {
    let mut engine = TextEngine::new(["line 1", "line 2", "line 3"]);
    engine.select_all();
    engine.perform_delete();
    assert_eq!(engine.line_count(), 1);
    assert!(engine.is_empty());
    assert_eq!(engine.current_position(), TextPosition::origin());
}

#[test]
fn backspace_with_selection_deletes_selection_only() {
    let mut engine = TextEngine::new(["abcdef"]);
    engine.set_cursor_position(TextPosition::new(0, 1), true);
    engine.perform_right(true, false);
    engine.perform_right(true, false);
    engine.perform_backspace();
    assert_eq!(engine.to_string(), "adef");
    assert_eq!(engine.current_position(), TextPosition::new(0, 1));
}

#[test]
fn shift_selection_then_typing_replaces_text() {
    let mut engine = TextEngine::new(["hello world"]);
    engine.perform_end(false, false);
    engine.perform_left(true, true);
    assert_eq!(
        engine.selection(),
        Some(TextRange::new(
            TextPosition::new(0, 6),
            TextPosition::new(0, 11)
        ))
    );
    assert_eq!(engine.selected_text(), "world");
    engine.insert_text("there\nfriend");
    assert_eq!(engine.lines(), ["hello there", "friend"]);
    assert_eq!(engine.current_position(), TextPosition::new(1, 6));
}

#[test]
fn typing_session_builds_document() {
    let mut engine = TextEngine::default();
    for c in "ab".chars() {
        engine.insert_text(&c.to_string());
    }
    engine.perform_enter();
    engine.insert_text("c\u{0327}d");
    engine.perform_left(false, false);
    engine.perform_backspace();
    assert_eq!(engine.lines(), ["ab", "d"]);
    assert_eq!(engine.current_position(), TextPosition::new(1, 0));
    engine.perform_backspace();
    assert_eq!(engine.to_string(), "abd");
    assert_eq!(engine.current_position(), TextPosition::new(0, 2));
}

#[test]
fn crlf_document_round_trips() {
    let mut engine = TextEngine::from_text("one\r\ntwo\r\n");
    assert_eq!(engine.lines(), ["one", "two", ""]);
    engine.set_cursor_position(TextPosition::new(1, 3), true);
    engine.insert_text("!");
    assert_eq!(engine.to_string(), "one\r\ntwo!\r\n");
}
