//! Interface block scanner.
//!
//! Finds top-level `type X interface { ... }` blocks and the method
//! signatures declared inside them, including signatures whose parameter or
//! result lists wrap across lines. One state machine handles both single-line
//! and multi-line signatures; each `(line, name)` pair is reported once.

use crate::domain::cancel::CancelToken;
use crate::domain::depth::{BRACES, DepthCounter, PARENS};
use crate::domain::error::ScanError;
use crate::domain::options::ScanOptions;
use crate::domain::patterns::{interface_open_regex, signature_start_regex, tail_after_last_paren};
use crate::domain::source::{SourceLine, SourceText, char_column};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A method signature declared by an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    /// Enclosing interface name.
    pub owner_name: String,
    pub line: usize,
    pub name: String,
    /// Character column of `name` on `line`.
    pub column: usize,
    pub span_end_line: usize,
}

/// A closed `type X interface { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceBlock {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub methods: Vec<MethodSignature>,
}

impl InterfaceBlock {
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InterfaceScanner {
    options: ScanOptions,
}

impl InterfaceScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn scan(&self, text: &SourceText) -> Vec<InterfaceBlock> {
        match self.scan_cancellable(text, &CancelToken::new()) {
            Ok(blocks) => blocks,
            Err(_) => Vec::new(),
        }
    }

    /// Scan `text`, checking `cancel` once per line. Nothing is returned on
    /// cancellation.
    pub fn scan_cancellable(
        &self,
        text: &SourceText,
        cancel: &CancelToken,
    ) -> Result<Vec<InterfaceBlock>, ScanError> {
        let mut blocks = Vec::new();
        let mut open: Option<OpenBlock> = None;

        for line in text.lines() {
            if cancel.is_cancelled() {
                return Err(ScanError::Cancelled { line: line.index });
            }
            if line.is_comment {
                continue;
            }

            if let Some(block) = open.as_mut() {
                if block.step(line) {
                    if let Some(block) = open.take() {
                        blocks.push(block.finish(line.index));
                    }
                }
                continue;
            }

            let Some(caps) = interface_open_regex().captures(&line.text) else {
                continue;
            };
            let name = caps[1].to_string();
            let mut braces = DepthCounter::new(BRACES, 0);
            braces.feed(&line.text);
            let block = OpenBlock::new(name, line.index, braces, self.options.lookahead_lines);
            if braces.is_balanced() {
                blocks.push(block.finish(line.index));
            } else {
                open = Some(block);
            }
        }

        // Unterminated block: close it at the last line.
        if let Some(block) = open {
            let last = text.len().saturating_sub(1);
            blocks.push(block.finish(last));
        }

        Ok(blocks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Inside the parameter list.
    Params,
    /// Parameter list closed with nothing after it; watching for a result
    /// list that starts on a following line.
    AwaitResult { closed_at: usize, remaining: usize },
    /// Inside a result list that started on its own line.
    Results,
}

#[derive(Debug)]
struct PendingSignature {
    name: String,
    line: usize,
    column: usize,
    parens: DepthCounter,
    phase: Phase,
    last_line: usize,
}

impl PendingSignature {
    /// Line the signature ends on if it had to be finalized now.
    fn end_line(&self) -> usize {
        match self.phase {
            Phase::AwaitResult { closed_at, .. } => closed_at,
            Phase::Params | Phase::Results => self.last_line,
        }
    }
}

#[derive(Debug)]
struct OpenBlock {
    name: String,
    start_line: usize,
    braces: DepthCounter,
    lookahead: usize,
    methods: Vec<MethodSignature>,
    seen: HashSet<(usize, String)>,
    pending: Option<PendingSignature>,
}

impl OpenBlock {
    fn new(name: String, start_line: usize, braces: DepthCounter, lookahead: usize) -> Self {
        Self {
            name,
            start_line,
            braces,
            lookahead,
            methods: Vec::new(),
            seen: HashSet::new(),
            pending: None,
        }
    }

    /// Feed one non-comment line of the body. Returns true when the block closes.
    fn step(&mut self, line: &SourceLine) -> bool {
        let consumed = self.advance_pending(line);

        if !consumed {
            self.try_start_signature(line);
        }

        self.braces.feed(&line.text);
        self.braces.is_balanced()
    }

    /// Continue an in-progress signature with `line`. Returns whether the
    /// line belonged to it.
    fn advance_pending(&mut self, line: &SourceLine) -> bool {
        let Some(mut pending) = self.pending.take() else {
            return false;
        };

        match pending.phase {
            Phase::Params => {
                pending.parens.feed(&line.text);
                pending.last_line = line.index;
                if pending.parens.is_balanced() {
                    if tail_after_last_paren(&line.text).is_empty() {
                        pending.phase = Phase::AwaitResult {
                            closed_at: line.index,
                            remaining: self.lookahead,
                        };
                        self.park(pending);
                    } else {
                        self.record(pending, line.index);
                    }
                } else {
                    self.pending = Some(pending);
                }
                true
            }
            Phase::Results => {
                pending.parens.feed(&line.text);
                pending.last_line = line.index;
                if pending.parens.is_balanced() {
                    self.record(pending, line.index);
                } else {
                    self.pending = Some(pending);
                }
                true
            }
            Phase::AwaitResult {
                closed_at,
                remaining,
            } => {
                if line.is_blank() {
                    pending.phase = Phase::AwaitResult {
                        closed_at,
                        remaining: remaining.saturating_sub(1),
                    };
                    self.park(pending);
                    true
                } else if line.trimmed().starts_with('(') {
                    let mut parens = DepthCounter::new(PARENS, 0);
                    parens.feed(&line.text);
                    pending.parens = parens;
                    pending.last_line = line.index;
                    if parens.is_balanced() {
                        self.record(pending, line.index);
                    } else {
                        pending.phase = Phase::Results;
                        self.pending = Some(pending);
                    }
                    true
                } else {
                    // Identifier, terminator or closing brace: the signature
                    // ended on its closing line and this line is its own.
                    self.record(pending, closed_at);
                    false
                }
            }
        }
    }

    fn try_start_signature(&mut self, line: &SourceLine) {
        let Some(caps) = signature_start_regex().captures(&line.text) else {
            return;
        };
        let name_match = match caps.get(1) {
            Some(m) => m,
            None => return,
        };

        let mut parens = DepthCounter::new(PARENS, 0);
        parens.feed(&line.text);
        let mut pending = PendingSignature {
            name: name_match.as_str().to_string(),
            line: line.index,
            column: char_column(&line.text, name_match.start()),
            parens,
            phase: Phase::Params,
            last_line: line.index,
        };

        if !parens.is_balanced() {
            self.pending = Some(pending);
        } else if tail_after_last_paren(&line.text).is_empty() {
            pending.phase = Phase::AwaitResult {
                closed_at: line.index,
                remaining: self.lookahead,
            };
            self.park(pending);
        } else {
            self.record(pending, line.index);
        }
    }

    /// Keep an awaiting signature unless its lookahead budget is spent.
    fn park(&mut self, pending: PendingSignature) {
        match pending.phase {
            Phase::AwaitResult {
                closed_at,
                remaining: 0,
            } => self.record(pending, closed_at),
            _ => self.pending = Some(pending),
        }
    }

    fn record(&mut self, pending: PendingSignature, end_line: usize) {
        if !self.seen.insert((pending.line, pending.name.clone())) {
            return;
        }
        debug!(
            interface = %self.name,
            method = %pending.name,
            line = pending.line,
            span_end_line = end_line,
            "interface method"
        );
        self.methods.push(MethodSignature {
            owner_name: self.name.clone(),
            line: pending.line,
            name: pending.name,
            column: pending.column,
            span_end_line: end_line.max(pending.line),
        });
    }

    /// Close the block; a signature still open is kept with its best span.
    fn finish(mut self, end_line: usize) -> InterfaceBlock {
        if let Some(pending) = self.pending.take() {
            let end = pending.end_line().min(end_line);
            self.record(pending, end);
        }
        debug!(
            interface = %self.name,
            start_line = self.start_line,
            end_line,
            methods = self.methods.len(),
            "interface block"
        );
        InterfaceBlock {
            name: self.name,
            start_line: self.start_line,
            end_line,
            methods: self.methods,
        }
    }
}
