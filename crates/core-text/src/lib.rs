//! Text primitives shared by the engine: positions, ranges, line endings and
//! grapheme-cluster helpers.
//!
//! Offsets are counted in Unicode scalar values (`char`s) within a line. Higher
//! layers keep every offset they produce on an extended grapheme cluster
//! boundary, so a base character plus its combining marks is always stepped
//! over, deleted, or split around as one unit.

pub mod line_ending;
pub mod motion;
pub mod segment;

pub use line_ending::{LineEnding, SplitText, split_breaks, split_lines};

/// A position inside a document expressed as (line index, char offset within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextPosition {
    pub line: usize,
    pub offset: usize,
}

impl TextPosition {
    pub const fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }

    pub const fn origin() -> Self {
        Self { line: 0, offset: 0 }
    }
}

/// Half-open range `[start, end)` between two positions, always ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: TextPosition,
    pub end: TextPosition,
}

impl TextRange {
    /// Build a range from two endpoints in any order.
    pub fn new(a: TextPosition, b: TextPosition) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }

    /// Number of lines touched by the range (1 for a single-line range).
    pub fn line_span(&self) -> usize {
        self.end.line - self.start.line + 1
    }
}

/// Grapheme cluster utilities operating on a single line with char offsets.
pub mod grapheme {
    use unicode_segmentation::UnicodeSegmentation;

    /// Iterate extended grapheme clusters in a line.
    pub fn iter(line: &str) -> impl Iterator<Item = &str> {
        line.graphemes(true)
    }

    /// Number of grapheme clusters (user-perceived characters) in a line.
    pub fn count(line: &str) -> usize {
        line.graphemes(true).count()
    }

    /// Length of a line in chars, the unit used by `TextPosition::offset`.
    pub fn char_len(line: &str) -> usize {
        line.chars().count()
    }

    /// Byte index of a char offset, clamped to the end of the line.
    pub fn byte_index(line: &str, offset: usize) -> usize {
        line.char_indices()
            .nth(offset)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len())
    }

    /// Previous cluster boundary strictly before `offset` (0 when already at the start).
    pub fn prev_boundary(line: &str, offset: usize) -> usize {
        let mut last = 0;
        let mut at = 0;
        for g in line.graphemes(true) {
            if at >= offset {
                break;
            }
            last = at;
            at += g.chars().count();
        }
        last
    }

    /// Next cluster boundary strictly after `offset` (line length when at or past the end).
    pub fn next_boundary(line: &str, offset: usize) -> usize {
        let mut at = 0;
        for g in line.graphemes(true) {
            at += g.chars().count();
            if at > offset {
                return at;
            }
        }
        at
    }

    /// Largest cluster boundary `<= offset`. Offsets past the end clamp to the line length.
    pub fn floor_boundary(line: &str, offset: usize) -> usize {
        let mut at = 0;
        for g in line.graphemes(true) {
            let next = at + g.chars().count();
            if next > offset {
                return at;
            }
            at = next;
        }
        at
    }

    /// Smallest cluster boundary `>= offset`, clamped to the line length.
    pub fn ceil_boundary(line: &str, offset: usize) -> usize {
        let mut at = 0;
        for g in line.graphemes(true) {
            if at >= offset {
                return at;
            }
            at += g.chars().count();
        }
        at
    }

    pub fn is_boundary(line: &str, offset: usize) -> bool {
        floor_boundary(line, offset) == offset
    }

    /// Word classification: alphanumeric, underscore, or one of `extra` as the first char.
    pub fn is_word(g: &str, extra: &str) -> bool {
        g.chars()
            .next()
            .map(|c| c == '_' || c.is_alphanumeric() || extra.contains(c))
            .unwrap_or(false)
    }
}
