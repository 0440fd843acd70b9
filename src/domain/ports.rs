use crate::domain::source::SourceText;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Identifies a document for the accessor and the oracle (a file path for
/// the bundled adapters).
pub type DocumentId = String;

/// 0-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub document: DocumentId,
    pub range: Range,
}

/// Program-wide "find implementations" capability (implemented by Infrastructure).
///
/// Given a position on a method name, returns every location that implements
/// it (interface method) or that it implements (concrete method).
pub trait ImplementationOracle: Send + Sync {
    fn lookup(
        &self,
        document: &DocumentId,
        position: Position,
    ) -> impl Future<Output = Result<Vec<Location>>> + Send;
}

/// Document accessor port
pub trait DocumentAccessor: Send + Sync {
    fn open(&self, document: &DocumentId) -> Result<SourceText>;
}
