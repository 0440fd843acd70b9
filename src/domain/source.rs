//! Immutable, line-indexable snapshot of a Go document.
//!
//! Scanners never look at the raw buffer: callers take a `SourceText` snapshot
//! and rescan it from scratch after every edit.

/// One line of a document with its 0-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub index: usize,
    pub text: String,
    /// Line is entirely a comment (`// ...` or part of a `/* ... */` block).
    pub is_comment: bool,
}

impl SourceLine {
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Snapshot of a whole document, split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<SourceLine>,
}

impl SourceText {
    pub fn new(text: &str) -> Self {
        let mut in_block_comment = false;
        let lines = text
            .lines()
            .enumerate()
            .map(|(index, raw)| {
                let is_comment = classify_comment(raw, &mut in_block_comment);
                SourceLine {
                    index,
                    text: raw.to_string(),
                    is_comment,
                }
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&SourceLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decide whether `raw` is a comment-only line, carrying block-comment state
/// across lines. A `/*` left open anywhere on the line, including after code,
/// puts the following lines in the comment.
fn classify_comment(raw: &str, in_block_comment: &mut bool) -> bool {
    let bytes = raw.as_bytes();
    let mut comment = *in_block_comment;
    let mut code = false;
    let mut i = 0;

    while i < bytes.len() {
        if *in_block_comment {
            if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                *in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        match (bytes[i], bytes.get(i + 1).copied()) {
            (b'/', Some(b'/')) => return !code,
            (b'/', Some(b'*')) => {
                comment = true;
                *in_block_comment = true;
                i += 2;
            }
            (b'"' | b'\'' | b'`', _) => {
                code = true;
                i = skip_literal(bytes, i);
            }
            (c, _) => {
                code |= !c.is_ascii_whitespace();
                i += 1;
            }
        }
    }

    comment && !code
}

/// Index just past the string or rune literal opened at `start`, or the line
/// end if it does not close on this line.
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if quote != b'`' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Character (Unicode scalar) column of a byte offset within `line`.
/// Offsets inside a multi-byte character count that character; offsets past
/// the end clamp to the line length.
pub fn char_column(line: &str, byte_offset: usize) -> usize {
    line.char_indices()
        .take_while(|(idx, _)| *idx < byte_offset)
        .count()
}
