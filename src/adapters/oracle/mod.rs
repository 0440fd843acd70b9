//! Implementation oracle adapters.

mod gopls;
mod lexical;

pub use gopls::GoplsOracle;
pub use lexical::LexicalOracle;

use crate::domain::ports::{DocumentId, ImplementationOracle, Location, Position};
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    /// Name-based matching over the workspace's Go files.
    #[default]
    Lexical,
    /// `gopls implementation`.
    Gopls,
}

impl OracleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OracleKind::Lexical => "lexical",
            OracleKind::Gopls => "gopls",
        }
    }
}

/// The oracle selected at startup.
#[derive(Debug, Clone)]
pub enum WorkspaceOracle {
    Lexical(LexicalOracle),
    Gopls(GoplsOracle),
}

impl WorkspaceOracle {
    pub fn kind(&self) -> OracleKind {
        match self {
            WorkspaceOracle::Lexical(_) => OracleKind::Lexical,
            WorkspaceOracle::Gopls(_) => OracleKind::Gopls,
        }
    }
}

impl ImplementationOracle for WorkspaceOracle {
    async fn lookup(&self, document: &DocumentId, position: Position) -> Result<Vec<Location>> {
        match self {
            WorkspaceOracle::Lexical(oracle) => oracle.lookup(document, position).await,
            WorkspaceOracle::Gopls(oracle) => oracle.lookup(document, position).await,
        }
    }
}
