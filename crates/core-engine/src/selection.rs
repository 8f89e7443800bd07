//! Selection queries and range removal.

use crate::TextEngine;
use core_text::{TextRange, grapheme};
use tracing::debug;

/// Selected char range on a single line, `[start, end)`, for highlight rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl TextEngine {
    /// The active selection in document order; `None` when there is no anchor
    /// or the anchor coincides with the cursor.
    pub fn selection(&self) -> Option<TextRange> {
        self.anchor
            .filter(|anchor| *anchor != self.current)
            .map(|anchor| TextRange::new(anchor, self.current))
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Selected text with lines joined by the configured separator.
    pub fn selected_text(&self) -> String {
        let Some(range) = self.selection() else {
            return String::new();
        };
        let sep = self.options.line_ending.as_str();
        let mut out = String::new();
        for span in self.spans_for(range) {
            if span.line > range.start.line {
                out.push_str(sep);
            }
            let line = &self.lines[span.line];
            let start = grapheme::byte_index(line, span.start);
            let end = grapheme::byte_index(line, span.end);
            out.push_str(&line[start..end]);
        }
        out
    }

    /// One span per line covered by the active selection.
    pub fn selection_spans(&self) -> Vec<LineSpan> {
        self.selection()
            .map(|range| self.spans_for(range))
            .unwrap_or_default()
    }

    /// Delete the active selection, leaving the cursor at its start.
    /// Returns false (and changes nothing) when no selection is active.
    pub fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection() else {
            return false;
        };
        let removed_lines = range.line_span() - 1;
        self.remove_range(range);
        self.current = range.start;
        self.anchor = None;
        self.settle_cursor();
        debug!(
            target: "text.engine",
            start_line = range.start.line,
            start_offset = range.start.offset,
            removed_lines,
            line_count = self.lines.len(),
            "selection_deleted"
        );
        true
    }

    fn spans_for(&self, range: TextRange) -> Vec<LineSpan> {
        (range.start.line..=range.end.line)
            .map(|line| LineSpan {
                line,
                start: if line == range.start.line {
                    range.start.offset
                } else {
                    0
                },
                end: if line == range.end.line {
                    range.end.offset
                } else {
                    self.line_len(line)
                },
            })
            .collect()
    }

    /// Remove `[start, end)`; the start line's prefix and end line's suffix are
    /// joined, and lines strictly between them are dropped.
    fn remove_range(&mut self, range: TextRange) {
        let start_line = range.start.line;
        let start = grapheme::byte_index(&self.lines[start_line], range.start.offset);
        let end = grapheme::byte_index(&self.lines[range.end.line], range.end.offset);
        if !range.is_multiline() {
            self.lines[start_line].replace_range(start..end, "");
            return;
        }
        let tail = self.lines[range.end.line].split_off(end);
        self.lines.drain(start_line + 1..=range.end.line);
        let head = &mut self.lines[start_line];
        head.truncate(start);
        head.push_str(&tail);
    }
}
