//! Line ending detection and splitting.
//!
//! Documents are held as a list of lines without terminators; the separator is
//! only reintroduced on serialization. CRLF, LF and lone CR are all accepted on
//! input.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Cr,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Result of splitting raw text into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub lines: Vec<String>,
    pub original: Option<LineEnding>, // majority style; None when the text has no breaks
    pub had_trailing_newline: bool,
    pub mixed: bool, // true if more than one style was encountered
}

/// Split `input` on line breaks. Always yields at least one (possibly empty) line;
/// a trailing break yields a final empty line so joining reproduces the text.
pub fn split_breaks(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut seg_start = 0usize;
    let mut i = 0usize;
    // Only slice at '\r' / '\n' bytes so multi-byte sequences stay intact.
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                out.push(&input[seg_start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                seg_start = i;
            }
            b'\n' => {
                out.push(&input[seg_start..i]);
                i += 1;
                seg_start = i;
            }
            _ => i += 1,
        }
    }
    out.push(&input[seg_start..]);
    out
}

/// Split `input` into lines and detect its line ending style.
/// Majority style wins; ties resolve by precedence CRLF > LF > CR.
pub fn split_lines(input: &str) -> SplitText {
    let bytes = input.as_bytes();
    let (mut crlf, mut lf, mut cr) = (0usize, 0usize, 0usize);
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                i += 2;
            }
            b'\r' => {
                cr += 1;
                i += 1;
            }
            b'\n' => {
                lf += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    let mut original = None;
    let mut max = 0usize;
    for (style, count) in [
        (LineEnding::Crlf, crlf),
        (LineEnding::Lf, lf),
        (LineEnding::Cr, cr),
    ] {
        if count > max {
            max = count;
            original = Some(style);
        }
    }
    let non_zero = [crlf, lf, cr].iter().filter(|c| **c > 0).count();
    SplitText {
        lines: split_breaks(input).into_iter().map(str::to_owned).collect(),
        original,
        had_trailing_newline: input.ends_with('\n') || input.ends_with('\r'),
        mixed: non_zero > 1,
    }
}
