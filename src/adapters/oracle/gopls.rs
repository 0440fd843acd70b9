//! Implementation oracle backed by `gopls implementation`.

use crate::adapters::fs::reader::FileDocumentAccessor;
use crate::domain::ports::{
    DocumentAccessor, DocumentId, ImplementationOracle, Location, Position, Range,
};
use crate::domain::source::{SourceText, char_column};
use anyhow::{Context, Result, bail};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use tokio::process::Command;
use tracing::debug;

/// `path:line:col`, `path:line:col-endcol` or `path:line:col-endline:endcol`
/// (1-based, byte columns).
fn span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+?):(\d+):(\d+)(?:-(?:(\d+):)?(\d+))?$").expect("gopls span regex")
    })
}

#[derive(Debug, Clone)]
pub struct GoplsOracle {
    binary: PathBuf,
    workdir: PathBuf,
    accessor: FileDocumentAccessor,
}

impl GoplsOracle {
    pub fn new(binary: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        let workdir = workdir.into();
        Self {
            binary: binary.into(),
            accessor: FileDocumentAccessor::with_root(workdir.clone()),
            workdir,
        }
    }

    /// `file:line:col` argument for gopls, 1-based with a byte column.
    fn query_span(&self, document: &DocumentId, position: Position) -> Result<String> {
        let text = self.accessor.open(document)?;
        let byte_col = text
            .line(position.line)
            .map(|line| byte_column(&line.text, position.character))
            .unwrap_or(position.character);
        let path = self.accessor.resolve(document);
        Ok(format!(
            "{}:{}:{}",
            path.display(),
            position.line + 1,
            byte_col + 1
        ))
    }

    /// Convert gopls output lines into locations with character columns.
    fn parse_output(&self, stdout: &str) -> Vec<Location> {
        stdout
            .lines()
            .filter_map(|line| parse_span(line.trim()))
            .map(|span| {
                let text = self.accessor.open(&span.document).ok();
                span.into_location(text.as_ref())
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawSpan {
    document: String,
    line: usize,
    byte_col: usize,
    end_line: usize,
    end_byte_col: usize,
}

impl RawSpan {
    fn into_location(self, text: Option<&SourceText>) -> Location {
        let to_char = |line: usize, byte_col: usize| {
            text.and_then(|t| t.line(line))
                .map(|l| char_column(&l.text, byte_col))
                .unwrap_or(byte_col)
        };
        Location {
            range: Range {
                start: Position {
                    line: self.line,
                    character: to_char(self.line, self.byte_col),
                },
                end: Position {
                    line: self.end_line,
                    character: to_char(self.end_line, self.end_byte_col),
                },
            },
            document: self.document,
        }
    }
}

fn parse_span(line: &str) -> Option<RawSpan> {
    let caps = span_regex().captures(line)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<usize>().ok());
    let start_line = number(2)?.checked_sub(1)?;
    let start_col = number(3)?.checked_sub(1)?;
    let end_line = number(4).and_then(|l| l.checked_sub(1)).unwrap_or(start_line);
    let end_col = number(5).and_then(|c| c.checked_sub(1)).unwrap_or(start_col);
    Some(RawSpan {
        document: caps[1].to_string(),
        line: start_line,
        byte_col: start_col,
        end_line,
        end_byte_col: end_col,
    })
}

/// Byte offset of a character column, clamped to the line end.
fn byte_column(line: &str, character: usize) -> usize {
    line.char_indices()
        .nth(character)
        .map_or(line.len(), |(idx, _)| idx)
}

impl ImplementationOracle for GoplsOracle {
    async fn lookup(&self, document: &DocumentId, position: Position) -> Result<Vec<Location>> {
        let span = self.query_span(document, position)?;
        debug!(binary = %self.binary.display(), span = %span, "running gopls implementation");

        let output = Command::new(&self.binary)
            .arg("implementation")
            .arg(&span)
            .current_dir(&self.workdir)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("gopls implementation failed: {}", stderr.trim());
        }
        Ok(self.parse_output(&String::from_utf8_lossy(&output.stdout)))
    }
}
