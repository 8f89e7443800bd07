//! Multi-line text engine: an ordered list of lines, a cursor, and an optional
//! selection anchor.
//!
//! The surrounding UI translates key presses and clicks into calls on
//! `TextEngine` and renders `lines()` plus cursor/selection after each call.
//! The engine owns no display, font, or clipboard state.
//!
//! Offsets (`TextPosition::offset`) count chars within a line. Every cursor
//! position the engine produces sits on an extended grapheme cluster boundary:
//! motions step over whole clusters and deletions remove whole clusters, so a
//! base letter and its combining marks behave as one user-perceived character.
//!
//! Selection model:
//! - `anchor: None` means no selection.
//! - A selection is active only when the anchor differs from the cursor; the
//!   selected text is the half-open range between the two, in document order.
//! - Extending motions set the anchor to the pre-move cursor if none exists yet;
//!   non-extending motions drop it.
//!
//! Logging:
//! - Edits open `trace` spans (`edit_enter`, `edit_backspace`, `edit_delete`,
//!   `edit_insert`) under the `text.engine` target.
//! - Content is never logged, only positions, counts and sizes.

use core_text::{grapheme, motion, split_lines};
use std::fmt;
use tracing::{debug, warn};

mod edit;
mod error;
mod navigate;
mod options;
mod selection;

pub use core_text::{LineEnding, TextPosition, TextRange};
pub use error::EngineError;
pub use options::EngineOptions;
pub use selection::LineSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEngine {
    lines: Vec<String>, // never empty
    current: TextPosition,
    anchor: Option<TextPosition>,
    options: EngineOptions,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new([""])
    }
}

impl TextEngine {
    /// Build an engine from initial lines. The cursor starts at `(0,0)` with no selection.
    /// Lines are stored verbatim; an empty sequence yields a single empty line.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(lines, EngineOptions::default())
    }

    pub fn with_options<I, S>(lines: I, options: EngineOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            current: TextPosition::origin(),
            anchor: None,
            options,
        }
    }

    /// Build an engine from raw text, splitting on CRLF, LF or lone CR. The
    /// detected majority style becomes the serialization separator.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_options(text, EngineOptions::default())
    }

    pub fn from_text_with_options(text: &str, mut options: EngineOptions) -> Self {
        let split = split_lines(text);
        if split.mixed {
            warn!(
                target: "text.engine",
                line_count = split.lines.len(),
                "mixed_line_endings_detected"
            );
        }
        if let Some(style) = split.original {
            options.line_ending = style;
        }
        debug!(
            target: "text.engine",
            size_bytes = text.len(),
            line_count = split.lines.len(),
            trailing_newline = split.had_trailing_newline,
            "engine_from_text"
        );
        Self::with_options(split.lines, options)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Read-only ordered view of the lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Length of a line in chars (the offset unit); 0 for a missing line.
    pub fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map(grapheme::char_len).unwrap_or(0)
    }

    /// Number of user-perceived characters on a line; 0 for a missing line.
    pub fn line_grapheme_count(&self, idx: usize) -> usize {
        self.line(idx).map(grapheme::count).unwrap_or(0)
    }

    pub fn current_position(&self) -> TextPosition {
        self.current
    }

    pub fn selection_anchor(&self) -> Option<TextPosition> {
        self.anchor
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn line_ending(&self) -> LineEnding {
        self.options.line_ending
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.options.line_ending = line_ending;
    }

    /// True when the document is a single empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Position after the last cluster of the last line.
    pub fn end_position(&self) -> TextPosition {
        motion::document_end(&self.lines)
    }

    /// Move the cursor to `position`.
    ///
    /// With `clear_selection` the anchor is dropped. Without it the placement
    /// extends a selection: a missing anchor is set to the previous cursor
    /// position, an existing anchor is kept.
    ///
    /// Out-of-range input is clamped to the document (last line, line end) and
    /// offsets inside a cluster snap to the cluster start.
    pub fn set_cursor_position(&mut self, position: TextPosition, clear_selection: bool) {
        let clamped = self.clamp_position(position);
        if clamped != position {
            debug!(
                target: "text.engine",
                line = position.line,
                offset = position.offset,
                clamped_line = clamped.line,
                clamped_offset = clamped.offset,
                "cursor_position_clamped"
            );
        }
        self.move_cursor(clamped, !clear_selection);
    }

    /// Strict variant of `set_cursor_position`: rejects positions outside the
    /// document or inside a cluster and leaves the engine untouched on error.
    pub fn try_set_cursor_position(
        &mut self,
        position: TextPosition,
        clear_selection: bool,
    ) -> Result<(), EngineError> {
        self.validate_position(position)?;
        self.move_cursor(position, !clear_selection);
        Ok(())
    }

    /// Check that `position` addresses a cluster boundary inside the document.
    pub fn validate_position(&self, position: TextPosition) -> Result<(), EngineError> {
        let Some(line) = self.line(position.line) else {
            return Err(EngineError::LineOutOfRange {
                line: position.line,
                line_count: self.lines.len(),
            });
        };
        let line_len = grapheme::char_len(line);
        if position.offset > line_len {
            return Err(EngineError::OffsetOutOfRange { position, line_len });
        }
        if !grapheme::is_boundary(line, position.offset) {
            return Err(EngineError::NotClusterBoundary { position });
        }
        Ok(())
    }

    /// Reset to a single empty line with the cursor at the origin.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(String::new());
        self.current = TextPosition::origin();
        self.anchor = None;
    }

    fn clamp_position(&self, position: TextPosition) -> TextPosition {
        let line = position.line.min(self.lines.len() - 1);
        TextPosition::new(
            line,
            grapheme::floor_boundary(&self.lines[line], position.offset),
        )
    }

    /// Apply the anchor rule, then move.
    fn move_cursor(&mut self, to: TextPosition, extend_selection: bool) {
        if extend_selection {
            if self.anchor.is_none() {
                self.anchor = Some(self.current);
            }
        } else {
            self.anchor = None;
        }
        self.current = to;
    }

    /// Snap the cursor back onto a cluster boundary after an edit joined text.
    fn settle_cursor(&mut self) {
        let line = &self.lines[self.current.line];
        self.current.offset = grapheme::floor_boundary(line, self.current.offset);
    }
}

impl fmt::Display for TextEngine {
    /// Lines joined with the configured separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.options.line_ending.as_str();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
