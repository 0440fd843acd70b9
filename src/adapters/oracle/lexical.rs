//! Name-based implementation oracle built on the scanners.
//!
//! Resolves an interface method to every receiver method with the same name
//! in the workspace, and a receiver method to every interface method with the
//! same name. No type information is used, so results are a superset of what
//! a type-checking oracle would return.

use crate::adapters::fs::reader::FileDocumentAccessor;
use crate::adapters::fs::walker::go_files;
use crate::domain::hint::{HintKind, HintMatcher, NavigationHint};
use crate::domain::options::ScanOptions;
use crate::domain::ports::{
    DocumentAccessor, DocumentId, ImplementationOracle, Location, Position, Range,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::task::spawn_blocking;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct LexicalOracle {
    root: PathBuf,
    accessor: FileDocumentAccessor,
    options: ScanOptions,
    include_tests: bool,
}

impl LexicalOracle {
    pub fn new(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        let root = root.into();
        Self {
            accessor: FileDocumentAccessor::with_root(root.clone()),
            root,
            options,
            include_tests: true,
        }
    }

    pub fn include_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    fn resolve(&self, document: &DocumentId, position: Position) -> Result<Vec<Location>> {
        let matcher = HintMatcher::new(self.options);
        let text = self.accessor.open(document)?;
        let hints = matcher.hints(&text);
        let Some(hint) = hints
            .iter()
            .find(|h| h.covers(position.line, position.character))
            .or_else(|| hints.iter().find(|h| h.anchor_line == position.line))
        else {
            debug!(document = %document, line = position.line, "no method at position");
            return Ok(Vec::new());
        };

        let mut locations = Vec::new();
        for path in go_files(&self.root, self.include_tests) {
            let id = path.to_string_lossy().into_owned();
            let text = match self.accessor.open(&id) {
                Ok(text) => text,
                Err(e) => {
                    warn!(file = %id, error = %e, "skipping unreadable file");
                    continue;
                }
            };
            let counterparts = matcher
                .hints(&text)
                .into_iter()
                .filter(|h| is_counterpart(hint, h))
                .map(|h| anchor_location(&id, &h));
            locations.extend(counterparts);
        }
        Ok(locations)
    }
}

fn is_counterpart(from: &NavigationHint, candidate: &NavigationHint) -> bool {
    let wanted = match from.kind {
        HintKind::InterfaceSide => HintKind::ReceiverSide,
        HintKind::ReceiverSide => HintKind::InterfaceSide,
    };
    candidate.kind == wanted && candidate.method_name == from.method_name
}

fn anchor_location(document: &str, hint: &NavigationHint) -> Location {
    Location {
        document: document.to_string(),
        range: Range {
            start: Position {
                line: hint.anchor_line,
                character: hint.anchor_start_col,
            },
            end: Position {
                line: hint.anchor_line,
                character: hint.anchor_end_col,
            },
        },
    }
}

impl ImplementationOracle for LexicalOracle {
    async fn lookup(&self, document: &DocumentId, position: Position) -> Result<Vec<Location>> {
        let oracle = self.clone();
        let document = document.clone();
        spawn_blocking(move || oracle.resolve(&document, position))
            .await
            .context("lexical lookup task failed")?
    }
}
