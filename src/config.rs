//! Runtime settings shared by the CLI, HTTP and MCP front ends.
//!
//! Values come from command-line flags with environment fallbacks
//! (`GOLENS_WORKSPACE`, `GOLENS_ORACLE`, `GOLENS_GOPLS`, `GOLENS_LOOKAHEAD`,
//! `GOLENS_EXCLUDE_TESTS`). Precedence: flag > environment > default.

use crate::adapters::oracle::{GoplsOracle, LexicalOracle, OracleKind, WorkspaceOracle};
use crate::domain::options::{DEFAULT_LOOKAHEAD_LINES, ScanOptions};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Workspace root searched by the lexical oracle and used to resolve relative paths
    #[arg(long, global = true, env = "GOLENS_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Implementation oracle
    #[arg(long, global = true, env = "GOLENS_ORACLE", value_enum, default_value_t = OracleKind::Lexical)]
    pub oracle: OracleKind,

    /// gopls binary used by the gopls oracle
    #[arg(long, global = true, env = "GOLENS_GOPLS", default_value = "gopls")]
    pub gopls: PathBuf,

    /// Lines inspected for a result list wrapped after a signature
    #[arg(long, global = true, env = "GOLENS_LOOKAHEAD", default_value_t = DEFAULT_LOOKAHEAD_LINES)]
    pub lookahead: usize,

    /// Ignore `_test.go` files when resolving lexically
    #[arg(long, global = true, env = "GOLENS_EXCLUDE_TESTS")]
    pub exclude_tests: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub workspace: PathBuf,
    pub oracle: OracleKind,
    pub gopls: PathBuf,
    pub scan: ScanOptions,
    pub include_tests: bool,
}

impl Settings {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            oracle: OracleKind::default(),
            gopls: PathBuf::from("gopls"),
            scan: ScanOptions::default(),
            include_tests: true,
        }
    }

    /// Canonicalize the workspace root so document ids compare reliably.
    pub fn resolved(mut self) -> Result<Self> {
        self.workspace = std::fs::canonicalize(&self.workspace).with_context(|| {
            format!("Workspace not found: {}", self.workspace.display())
        })?;
        Ok(self)
    }

    pub fn build_oracle(&self) -> WorkspaceOracle {
        match self.oracle {
            OracleKind::Lexical => WorkspaceOracle::Lexical(
                LexicalOracle::new(self.workspace.clone(), self.scan)
                    .include_tests(self.include_tests),
            ),
            OracleKind::Gopls => {
                WorkspaceOracle::Gopls(GoplsOracle::new(self.gopls.clone(), self.workspace.clone()))
            }
        }
    }
}

impl From<SettingsArgs> for Settings {
    fn from(args: SettingsArgs) -> Self {
        Self {
            workspace: args.workspace,
            oracle: args.oracle,
            gopls: args.gopls,
            scan: ScanOptions {
                lookahead_lines: args.lookahead,
            },
            include_tests: !args.exclude_tests,
        }
    }
}
