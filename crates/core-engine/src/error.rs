use core_text::TextPosition;
use thiserror::Error;

/// Rejections from the strict cursor placement API. Regular operations never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error(
        "offset {} is past the end of line {} (length {line_len})",
        .position.offset,
        .position.line
    )]
    OffsetOutOfRange {
        position: TextPosition,
        line_len: usize,
    },
    #[error("offset {} on line {} splits a grapheme cluster", .position.offset, .position.line)]
    NotClusterBoundary { position: TextPosition },
}
