//! Segmentation adapter: splits a line into grapheme clusters with char offsets.
//!
//! Contract:
//! - Input: a single line (no line breaks expected, but they are segmented like any char).
//! - Output: `Vec<Segment>` in order, non-overlapping, covering the entire line.
//! - Offsets are char offsets, matching `TextPosition::offset`.
//! - The input is not normalized; segmenting never changes the stored text.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub cluster: &'a str,
    pub start: usize, // char offset (inclusive)
    pub end: usize,   // char offset (exclusive)
}

impl Segment<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Segment a line into grapheme clusters with char ranges.
pub fn segment(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut at = 0usize;
    for g in line.graphemes(true) {
        let len = g.chars().count();
        out.push(Segment {
            cluster: g,
            start: at,
            end: at + len,
        });
        at += len;
    }
    out
}

/// Index of the first segment starting at or after `offset` (segment count when past the end).
pub fn index_at(segments: &[Segment<'_>], offset: usize) -> usize {
    segments
        .iter()
        .position(|s| s.start >= offset)
        .unwrap_or(segments.len())
}
