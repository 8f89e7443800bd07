use crate::TextEngine;
use core_text::{TextPosition, motion};

impl TextEngine {
    /// Move one grapheme cluster left (or to the previous word start), wrapping
    /// to the end of the previous line. No-op at the document start.
    pub fn perform_left(&mut self, extend_selection: bool, word_boundary: bool) {
        let target = if word_boundary {
            motion::word_backward(&self.lines, self.current, &self.options.extra_word_chars)
        } else {
            motion::left(&self.lines, self.current)
        };
        self.move_cursor(target, extend_selection);
    }

    /// Move one grapheme cluster right (or to the next word start), wrapping to
    /// the start of the next line. No-op at the document end.
    pub fn perform_right(&mut self, extend_selection: bool, word_boundary: bool) {
        let target = if word_boundary {
            motion::word_forward(&self.lines, self.current, &self.options.extra_word_chars)
        } else {
            motion::right(&self.lines, self.current)
        };
        self.move_cursor(target, extend_selection);
    }

    pub fn perform_up(&mut self, extend_selection: bool) {
        let target = motion::up(&self.lines, self.current);
        self.move_cursor(target, extend_selection);
    }

    pub fn perform_down(&mut self, extend_selection: bool) {
        let target = motion::down(&self.lines, self.current);
        self.move_cursor(target, extend_selection);
    }

    /// Line start, or the document start when `document` is set.
    pub fn perform_home(&mut self, extend_selection: bool, document: bool) {
        let target = if document {
            TextPosition::origin()
        } else {
            motion::line_start(self.current)
        };
        self.move_cursor(target, extend_selection);
    }

    /// Line end, or the document end when `document` is set.
    pub fn perform_end(&mut self, extend_selection: bool, document: bool) {
        let target = if document {
            self.end_position()
        } else {
            motion::line_end(&self.lines, self.current)
        };
        self.move_cursor(target, extend_selection);
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(TextPosition::origin());
        self.current = self.end_position();
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }
}
