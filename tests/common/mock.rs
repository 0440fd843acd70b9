//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use golens::domain::ports::{
    DocumentAccessor, DocumentId, ImplementationOracle, Location, Position, Range,
};
use golens::domain::source::SourceText;

/// Mock DocumentAccessor that serves content from an in-memory map.
#[derive(Default)]
pub struct MockDocumentAccessor {
    files: HashMap<String, String>,
}

impl MockDocumentAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, id: &str, content: &str) -> Self {
        self.files.insert(id.to_string(), content.to_string());
        self
    }
}

impl DocumentAccessor for MockDocumentAccessor {
    fn open(&self, document: &DocumentId) -> Result<SourceText> {
        self.files
            .get(document)
            .map(|content| SourceText::new(content))
            .ok_or_else(|| anyhow!("File not found: {}", document))
    }
}

/// Oracle returning scripted locations per `(document, line)` and recording
/// every query it receives.
#[derive(Default)]
pub struct MockOracle {
    answers: HashMap<(String, usize), Vec<Location>>,
    fail: bool,
    pub queries: Mutex<Vec<(String, Position)>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn answer(mut self, document: &str, line: usize, locations: Vec<Location>) -> Self {
        self.answers.insert((document.to_string(), line), locations);
        self
    }
}

impl ImplementationOracle for MockOracle {
    async fn lookup(&self, document: &DocumentId, position: Position) -> Result<Vec<Location>> {
        self.queries
            .lock()
            .unwrap()
            .push((document.clone(), position));
        if self.fail {
            return Err(anyhow!("index unavailable"));
        }
        Ok(self
            .answers
            .get(&(document.clone(), position.line))
            .cloned()
            .unwrap_or_default())
    }
}

/// Location of `len` characters at `line:column` of `document`.
pub fn loc(document: &str, line: usize, column: usize, len: usize) -> Location {
    Location {
        document: document.to_string(),
        range: Range {
            start: Position {
                line,
                character: column,
            },
            end: Position {
                line,
                character: column + len,
            },
        },
    }
}
