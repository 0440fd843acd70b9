//! Receiver method scanner: `func (recv *Type) Name(...) ... { ... }`.

use crate::domain::cancel::CancelToken;
use crate::domain::depth::{BRACES, DepthCounter, PARENS};
use crate::domain::error::ScanError;
use crate::domain::patterns::receiver_method_regex;
use crate::domain::source::{SourceText, char_column};
use serde::Serialize;
use tracing::debug;

/// A method declared with a receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiverMethodDecl {
    /// Receiver type with any pointer marker stripped.
    pub receiver_type: String,
    /// Empty for anonymous receivers such as `func (*T) M()`.
    pub receiver_name: String,
    pub name: String,
    /// Character column of `name` on `start_line`.
    pub column: usize,
    pub start_line: usize,
    pub end_line: usize,
}

impl ReceiverMethodDecl {
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiverMethodScanner;

impl ReceiverMethodScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, text: &SourceText) -> Vec<ReceiverMethodDecl> {
        match self.scan_cancellable(text, &CancelToken::new()) {
            Ok(decls) => decls,
            Err(_) => Vec::new(),
        }
    }

    pub fn scan_cancellable(
        &self,
        text: &SourceText,
        cancel: &CancelToken,
    ) -> Result<Vec<ReceiverMethodDecl>, ScanError> {
        let mut decls = Vec::new();

        for line in text.lines() {
            if cancel.is_cancelled() {
                return Err(ScanError::Cancelled { line: line.index });
            }
            if line.is_comment {
                continue;
            }
            let Some(caps) = receiver_method_regex().captures(&line.text) else {
                continue;
            };
            let (Some(type_match), Some(name_match), Some(whole)) =
                (caps.get(2), caps.get(3), caps.get(0))
            else {
                continue;
            };

            let end_line = declaration_end(text, line.index, &line.text[whole.end()..]);
            let decl = ReceiverMethodDecl {
                receiver_type: type_match.as_str().to_string(),
                receiver_name: caps
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                name: name_match.as_str().to_string(),
                column: char_column(&line.text, name_match.start()),
                start_line: line.index,
                end_line,
            };
            debug!(
                receiver = %decl.receiver_type,
                method = %decl.name,
                start_line = decl.start_line,
                end_line = decl.end_line,
                "receiver method"
            );
            decls.push(decl);
        }

        Ok(decls)
    }
}

/// Last line of the declaration starting at `start`: the first line where the
/// parameter list is closed and any body has closed too. Falls back to the
/// last line of the document.
fn declaration_end(text: &SourceText, start: usize, rest_of_first_line: &str) -> usize {
    let mut parens = DepthCounter::new(PARENS, 1);
    let mut braces = DepthCounter::new(BRACES, 0);
    parens.feed(rest_of_first_line);
    braces.feed(rest_of_first_line);
    if parens.is_balanced() && braces.is_balanced() {
        return start;
    }

    let mut last = start;
    for line in &text.lines()[start + 1..] {
        last = line.index;
        if line.is_comment {
            continue;
        }
        parens.feed(&line.text);
        braces.feed(&line.text);
        if parens.is_balanced() && braces.is_balanced() {
            return line.index;
        }
    }
    last
}
