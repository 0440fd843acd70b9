//! Navigation hints: where to place a jump anchor and which lookup to run.

use crate::domain::cancel::CancelToken;
use crate::domain::error::ScanError;
use crate::domain::interface::{InterfaceBlock, InterfaceScanner};
use crate::domain::options::ScanOptions;
use crate::domain::receiver::{ReceiverMethodDecl, ReceiverMethodScanner};
use crate::domain::source::SourceText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// Interface method: look up its implementations.
    InterfaceSide,
    /// Receiver method: look up the interface methods it satisfies.
    ReceiverSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationHint {
    pub anchor_line: usize,
    pub anchor_start_col: usize,
    /// Exclusive.
    pub anchor_end_col: usize,
    pub method_name: String,
    pub kind: HintKind,
    /// Interface name for interface-side hints, receiver type otherwise.
    pub context: String,
}

impl NavigationHint {
    fn anchored(line: usize, column: usize, name: &str, kind: HintKind, context: &str) -> Self {
        Self {
            anchor_line: line,
            anchor_start_col: column,
            anchor_end_col: column + name.chars().count(),
            method_name: name.to_string(),
            kind,
            context: context.to_string(),
        }
    }

    pub fn covers(&self, line: usize, column: usize) -> bool {
        self.anchor_line == line && (self.anchor_start_col..self.anchor_end_col).contains(&column)
    }
}

fn interface_hints(block: &InterfaceBlock) -> impl Iterator<Item = NavigationHint> + '_ {
    block.methods.iter().map(|m| {
        NavigationHint::anchored(m.line, m.column, &m.name, HintKind::InterfaceSide, &block.name)
    })
}

impl From<&ReceiverMethodDecl> for NavigationHint {
    fn from(decl: &ReceiverMethodDecl) -> Self {
        NavigationHint::anchored(
            decl.start_line,
            decl.column,
            &decl.name,
            HintKind::ReceiverSide,
            &decl.receiver_type,
        )
    }
}

/// Everything one scan pass found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentScan {
    pub interfaces: Vec<InterfaceBlock>,
    pub receiver_methods: Vec<ReceiverMethodDecl>,
}

impl DocumentScan {
    /// Interface-side hints first, then receiver-side hints, each in source order.
    pub fn hints(&self) -> Vec<NavigationHint> {
        let interface_side = self.interfaces.iter().flat_map(interface_hints);
        let receiver_side = self.receiver_methods.iter().map(NavigationHint::from);
        interface_side.chain(receiver_side).collect()
    }

    pub fn interface_at(&self, line: usize) -> Option<&InterfaceBlock> {
        self.interfaces.iter().find(|b| b.contains_line(line))
    }

    /// Innermost receiver method whose span contains `line`.
    pub fn receiver_method_at(&self, line: usize) -> Option<&ReceiverMethodDecl> {
        self.receiver_methods
            .iter()
            .filter(|d| d.contains_line(line))
            .max_by_key(|d| d.start_line)
    }
}

/// Runs both scanners over a document and assembles hints.
#[derive(Debug, Clone, Default)]
pub struct HintMatcher {
    interfaces: InterfaceScanner,
    receivers: ReceiverMethodScanner,
}

impl HintMatcher {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            interfaces: InterfaceScanner::new(options),
            receivers: ReceiverMethodScanner::new(),
        }
    }

    pub fn scan(&self, text: &SourceText) -> DocumentScan {
        DocumentScan {
            interfaces: self.interfaces.scan(text),
            receiver_methods: self.receivers.scan(text),
        }
    }

    pub fn scan_cancellable(
        &self,
        text: &SourceText,
        cancel: &CancelToken,
    ) -> Result<DocumentScan, ScanError> {
        Ok(DocumentScan {
            interfaces: self.interfaces.scan_cancellable(text, cancel)?,
            receiver_methods: self.receivers.scan_cancellable(text, cancel)?,
        })
    }

    pub fn hints(&self, text: &SourceText) -> Vec<NavigationHint> {
        self.scan(text).hints()
    }
}
