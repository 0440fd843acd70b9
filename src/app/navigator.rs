//! Hint activation: delegates to the implementation oracle, then narrows and
//! labels what it returns so a picker can show it without re-parsing.

use crate::domain::hint::{DocumentScan, HintKind, HintMatcher, NavigationHint};
use crate::domain::options::ScanOptions;
use crate::domain::patterns::starts_with_func;
use crate::domain::ports::{DocumentAccessor, DocumentId, ImplementationOracle, Location, Position};
use crate::domain::source::SourceText;
use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// One place the user can jump to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    pub location: Location,
    /// `Type.Method` for implementations, `Interface.Method` for interfaces.
    pub label: String,
    /// `file.go:line` (1-based).
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// Exactly one target: open it directly.
    Jump(NavigationTarget),
    /// Several targets, sorted by document then position.
    Pick(Vec<NavigationTarget>),
    /// Nothing to navigate to; an informational message for the user.
    Notice(String),
}

impl NavigationOutcome {
    pub fn targets(&self) -> &[NavigationTarget] {
        match self {
            NavigationOutcome::Jump(target) => std::slice::from_ref(target),
            NavigationOutcome::Pick(targets) => targets,
            NavigationOutcome::Notice(_) => &[],
        }
    }
}

pub struct Navigator<O, A> {
    oracle: O,
    accessor: A,
    matcher: HintMatcher,
}

impl<O: ImplementationOracle, A: DocumentAccessor> Navigator<O, A> {
    pub fn new(oracle: O, accessor: A, options: ScanOptions) -> Self {
        Self {
            oracle,
            accessor,
            matcher: HintMatcher::new(options),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn scan(&self, document: &DocumentId) -> Result<DocumentScan> {
        let text = self.accessor.open(document)?;
        Ok(self.matcher.scan(&text))
    }

    pub fn hints(&self, document: &DocumentId) -> Result<Vec<NavigationHint>> {
        Ok(self.scan(document)?.hints())
    }

    /// The hint anchored at `line`; with a column, the one whose anchor covers it.
    pub fn hint_at(
        &self,
        document: &DocumentId,
        line: usize,
        column: Option<usize>,
    ) -> Result<Option<NavigationHint>> {
        let hints = self.hints(document)?;
        Ok(hints.into_iter().find(|h| match column {
            Some(col) => h.covers(line, col),
            None => h.anchor_line == line,
        }))
    }

    /// Activate `hint` in `document`. Never fails: lookup problems become a notice.
    pub async fn activate(&self, document: &DocumentId, hint: &NavigationHint) -> NavigationOutcome {
        let found = self.lookup(document, hint).await;
        self.resolve(document, hint, found)
    }

    /// Ask the oracle about the hint's anchor position.
    pub async fn lookup(&self, document: &DocumentId, hint: &NavigationHint) -> Result<Vec<Location>> {
        let position = Position {
            line: hint.anchor_line,
            character: hint.anchor_start_col,
        };
        let qualified = format!("{}.{}", hint.context, hint.method_name);
        info!(document = %document, method = %qualified, kind = ?hint.kind, "navigation requested");
        self.oracle.lookup(document, position).await
    }

    /// Filter and label an oracle answer. Opens result documents (blocking).
    pub fn resolve(
        &self,
        document: &DocumentId,
        hint: &NavigationHint,
        found: Result<Vec<Location>>,
    ) -> NavigationOutcome {
        let qualified = format!("{}.{}", hint.context, hint.method_name);
        let locations = match found {
            Ok(locations) => locations,
            Err(e) => {
                warn!(method = %qualified, error = %e, "implementation lookup failed");
                return NavigationOutcome::Notice(format!("Lookup failed for {qualified}: {e:#}"));
            }
        };
        debug!(method = %qualified, results = locations.len(), "oracle returned");

        let mut documents = DocumentCache::new(&self.accessor, &self.matcher);
        let mut targets: Vec<NavigationTarget> = match hint.kind {
            HintKind::InterfaceSide => locations
                .into_iter()
                .filter(|loc| !(loc.document == *document && loc.range.start.line == hint.anchor_line))
                .map(|loc| label_implementation(&mut documents, loc, &hint.method_name))
                .collect(),
            HintKind::ReceiverSide => locations
                .into_iter()
                .filter_map(|loc| interface_member(&mut documents, loc, &hint.method_name))
                .collect(),
        };
        targets.sort_by(|a, b| a.location.cmp(&b.location));
        targets.dedup_by(|a, b| a.location == b.location);

        match targets.len() {
            0 => NavigationOutcome::Notice(match hint.kind {
                HintKind::InterfaceSide => format!("No implementations found for {qualified}"),
                HintKind::ReceiverSide => format!("No interface declares {qualified}"),
            }),
            1 => NavigationOutcome::Jump(targets.remove(0)),
            _ => NavigationOutcome::Pick(targets),
        }
    }
}

/// Per-activation cache of opened and scanned documents.
struct DocumentCache<'a, A> {
    accessor: &'a A,
    matcher: &'a HintMatcher,
    scans: HashMap<DocumentId, Option<(SourceText, DocumentScan)>>,
}

impl<'a, A: DocumentAccessor> DocumentCache<'a, A> {
    fn new(accessor: &'a A, matcher: &'a HintMatcher) -> Self {
        Self {
            accessor,
            matcher,
            scans: HashMap::new(),
        }
    }

    fn get(&mut self, document: &DocumentId) -> Option<&(SourceText, DocumentScan)> {
        let (accessor, matcher) = (self.accessor, self.matcher);
        self.scans
            .entry(document.clone())
            .or_insert_with(|| match accessor.open(document) {
                Ok(text) => {
                    let scan = matcher.scan(&text);
                    Some((text, scan))
                }
                Err(e) => {
                    warn!(document = %document, error = %e, "cannot open result document");
                    None
                }
            })
            .as_ref()
    }
}

fn label_implementation<A: DocumentAccessor>(
    documents: &mut DocumentCache<'_, A>,
    location: Location,
    method: &str,
) -> NavigationTarget {
    let line = location.range.start.line;
    let label = documents
        .get(&location.document)
        .and_then(|(_, scan)| scan.receiver_method_at(line))
        .map(|decl| format!("{}.{}", decl.receiver_type, decl.name))
        .unwrap_or_else(|| format!("{method} ({})", short_location(&location)));
    NavigationTarget {
        detail: short_location(&location),
        label,
        location,
    }
}

/// Keep `location` only if it lexically looks like an interface member.
fn interface_member<A: DocumentAccessor>(
    documents: &mut DocumentCache<'_, A>,
    location: Location,
    method: &str,
) -> Option<NavigationTarget> {
    let line = location.range.start.line;
    let (text, scan) = documents.get(&location.document)?;
    let source_line = text.line(line)?;
    if starts_with_func(&source_line.text) {
        return None;
    }
    let block = scan.interface_at(line)?;
    let name = block
        .methods
        .iter()
        .find(|m| m.line == line)
        .map_or(method, |m| m.name.as_str());
    Some(NavigationTarget {
        label: format!("{}.{}", block.name, name),
        detail: short_location(&location),
        location,
    })
}

fn short_location(location: &Location) -> String {
    let file = Path::new(&location.document)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.document.clone());
    format!("{}:{}", file, location.range.start.line + 1)
}
