//! Edit operations. Every edit first deletes an active selection (Backspace and
//! Delete stop there), then applies itself at the resulting cursor.

use crate::TextEngine;
use core_text::{TextPosition, grapheme, split_breaks};
use tracing::{trace, trace_span};

impl TextEngine {
    /// Split the current line at the cursor; the cursor moves to the start of the new line.
    pub fn perform_enter(&mut self) {
        let _span = trace_span!(target: "text.engine", "edit_enter").entered();
        self.delete_selection();
        self.anchor = None;
        let TextPosition { line, offset } = self.current;
        let at = grapheme::byte_index(&self.lines[line], offset);
        let tail = self.lines[line].split_off(at);
        self.lines.insert(line + 1, tail);
        self.current = TextPosition::new(line + 1, 0);
        trace!(target: "text.engine", line, line_count = self.lines.len(), "line_split");
    }

    /// Delete the selection, else the cluster before the cursor, else join with
    /// the previous line. No-op at the document start.
    pub fn perform_backspace(&mut self) {
        let _span = trace_span!(target: "text.engine", "edit_backspace").entered();
        if self.delete_selection() {
            return;
        }
        self.anchor = None;
        let TextPosition { line, offset } = self.current;
        if offset > 0 {
            let text = &mut self.lines[line];
            let prev = grapheme::prev_boundary(text, offset);
            let start = grapheme::byte_index(text, prev);
            let end = grapheme::byte_index(text, offset);
            text.replace_range(start..end, "");
            self.current.offset = prev;
        } else if line > 0 {
            let removed = self.lines.remove(line);
            let prev = &mut self.lines[line - 1];
            let prev_len = grapheme::char_len(prev);
            prev.push_str(&removed);
            self.current = TextPosition::new(line - 1, prev_len);
            trace!(target: "text.engine", line, line_count = self.lines.len(), "lines_joined");
        } else {
            return;
        }
        self.settle_cursor();
    }

    /// Delete the selection, else the cluster at the cursor, else pull the next
    /// line up onto this one. The cursor does not move. No-op at the document end.
    pub fn perform_delete(&mut self) {
        let _span = trace_span!(target: "text.engine", "edit_delete").entered();
        if self.delete_selection() {
            return;
        }
        self.anchor = None;
        let TextPosition { line, offset } = self.current;
        if offset < self.line_len(line) {
            let text = &mut self.lines[line];
            let next = grapheme::next_boundary(text, offset);
            let start = grapheme::byte_index(text, offset);
            let end = grapheme::byte_index(text, next);
            text.replace_range(start..end, "");
        } else if line + 1 < self.lines.len() {
            let next = self.lines.remove(line + 1);
            self.lines[line].push_str(&next);
            trace!(target: "text.engine", line, line_count = self.lines.len(), "lines_joined");
        } else {
            return;
        }
        self.settle_cursor();
    }

    /// Insert typed or pasted text at the cursor, replacing any active selection.
    /// Embedded CRLF, LF or CR breaks create new lines; the cursor ends after the text.
    pub fn insert_text(&mut self, text: &str) {
        let _span =
            trace_span!(target: "text.engine", "edit_insert", size_bytes = text.len()).entered();
        self.delete_selection();
        self.anchor = None;
        if text.is_empty() {
            return;
        }
        let mut pieces = split_breaks(text).into_iter();
        let first = pieces.next().unwrap_or_default();
        let rest: Vec<String> = pieces.map(str::to_string).collect();
        let inserted_lines = rest.len();
        let TextPosition { line, offset } = self.current;
        let at = grapheme::byte_index(&self.lines[line], offset);
        let tail = self.lines[line].split_off(at);
        self.lines[line].push_str(first);
        let following = self.lines.split_off(line + 1);
        self.lines.extend(rest);
        self.lines.extend(following);
        let last = line + inserted_lines;
        let end_offset = grapheme::char_len(&self.lines[last]);
        self.lines[last].push_str(&tail);
        // Text after the insertion point may extend the last inserted cluster.
        self.current = TextPosition::new(
            last,
            grapheme::ceil_boundary(&self.lines[last], end_offset),
        );
        trace!(
            target: "text.engine",
            inserted_lines,
            line_count = self.lines.len(),
            "text_inserted"
        );
    }
}
