//! Cursor motion helpers.
//!
//! These operate purely on a line slice + `TextPosition` pair and return the
//! target position; they never mutate and are free of selection state. Callers
//! pass positions that are valid for `lines` and on cluster boundaries.

use crate::segment::{index_at, segment};
use crate::{TextPosition, grapheme};

fn line_at(lines: &[String], idx: usize) -> &str {
    lines.get(idx).map(String::as_str).unwrap_or("")
}

/// Position just after the last cluster of the last line.
pub fn document_end(lines: &[String]) -> TextPosition {
    let last = lines.len().saturating_sub(1);
    TextPosition::new(last, grapheme::char_len(line_at(lines, last)))
}

/// Move left one grapheme cluster, wrapping to the end of the previous line.
pub fn left(lines: &[String], pos: TextPosition) -> TextPosition {
    if pos.offset > 0 {
        TextPosition::new(
            pos.line,
            grapheme::prev_boundary(line_at(lines, pos.line), pos.offset),
        )
    } else if pos.line > 0 {
        let line = pos.line - 1;
        TextPosition::new(line, grapheme::char_len(line_at(lines, line)))
    } else {
        pos
    }
}

/// Move right one grapheme cluster, wrapping to the start of the next line.
pub fn right(lines: &[String], pos: TextPosition) -> TextPosition {
    let content = line_at(lines, pos.line);
    if pos.offset < grapheme::char_len(content) {
        TextPosition::new(pos.line, grapheme::next_boundary(content, pos.offset))
    } else if pos.line + 1 < lines.len() {
        TextPosition::new(pos.line + 1, 0)
    } else {
        pos
    }
}

/// Move up one line keeping the cluster column (clamped to the line end).
pub fn up(lines: &[String], pos: TextPosition) -> TextPosition {
    if pos.line == 0 {
        return pos;
    }
    vertical(lines, pos, pos.line - 1)
}

/// Move down one line keeping the cluster column (clamped to the line end).
pub fn down(lines: &[String], pos: TextPosition) -> TextPosition {
    if pos.line + 1 >= lines.len() {
        return pos;
    }
    vertical(lines, pos, pos.line + 1)
}

fn vertical(lines: &[String], pos: TextPosition, line: usize) -> TextPosition {
    let column = index_at(&segment(line_at(lines, pos.line)), pos.offset);
    let target = line_at(lines, line);
    let offset = segment(target)
        .get(column)
        .map(|s| s.start)
        .unwrap_or_else(|| grapheme::char_len(target));
    TextPosition::new(line, offset)
}

pub fn line_start(pos: TextPosition) -> TextPosition {
    TextPosition::new(pos.line, 0)
}

pub fn line_end(lines: &[String], pos: TextPosition) -> TextPosition {
    TextPosition::new(pos.line, grapheme::char_len(line_at(lines, pos.line)))
}

/// Move forward to the start of the next word.
/// - If on a word cluster, skip the rest of that word first.
/// - Then skip non-word clusters and line breaks until a word cluster.
/// - With no later word, land at the end of the document.
pub fn word_forward(lines: &[String], pos: TextPosition, extra: &str) -> TextPosition {
    let mut line = pos.line;
    let mut segs = segment(line_at(lines, line));
    let mut idx = index_at(&segs, pos.offset);
    while idx < segs.len() && grapheme::is_word(segs[idx].cluster, extra) {
        idx += 1;
    }
    loop {
        while idx < segs.len() {
            if grapheme::is_word(segs[idx].cluster, extra) {
                return TextPosition::new(line, segs[idx].start);
            }
            idx += 1;
        }
        if line + 1 >= lines.len() {
            return line_end(lines, TextPosition::new(line, 0));
        }
        line += 1;
        segs = segment(line_at(lines, line));
        idx = 0;
    }
}

/// Move backward to the start of the previous word. If currently at the start of a
/// word, move to the start of the word before it. With no earlier word, land at the origin.
pub fn word_backward(lines: &[String], pos: TextPosition, extra: &str) -> TextPosition {
    let mut line = pos.line;
    let mut segs = segment(line_at(lines, line));
    let mut idx = index_at(&segs, pos.offset);
    // Skip punctuation/whitespace (and line breaks) backwards.
    loop {
        while idx > 0 && !grapheme::is_word(segs[idx - 1].cluster, extra) {
            idx -= 1;
        }
        if idx > 0 {
            break;
        }
        if line == 0 {
            return TextPosition::origin();
        }
        line -= 1;
        segs = segment(line_at(lines, line));
        idx = segs.len();
    }
    while idx > 0 && grapheme::is_word(segs[idx - 1].cluster, extra) {
        idx -= 1;
    }
    TextPosition::new(line, segs.get(idx).map(|s| s.start).unwrap_or(0))
}
