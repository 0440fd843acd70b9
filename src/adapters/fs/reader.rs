use crate::domain::ports::{DocumentAccessor, DocumentId};
use crate::domain::source::SourceText;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File system document accessor: document ids are paths, relative ones
/// resolved against an optional root.
#[derive(Debug, Clone, Default)]
pub struct FileDocumentAccessor {
    root: Option<PathBuf>,
}

impl FileDocumentAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self, document: &DocumentId) -> PathBuf {
        let path = Path::new(document);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DocumentAccessor for FileDocumentAccessor {
    fn open(&self, document: &DocumentId) -> Result<SourceText> {
        let path = self.resolve(document);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        Ok(SourceText::new(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.go"), "package a\n\ntype I interface {\n}\n").unwrap();

        let accessor = FileDocumentAccessor::with_root(dir.path());
        let text = accessor.open(&"a.go".to_string()).unwrap();
        assert_eq!(text.len(), 4);
        assert_eq!(text.line(2).unwrap().text, "type I interface {");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let accessor = FileDocumentAccessor::new();
        let err = accessor
            .open(&"/definitely/not/here.go".to_string())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read source file"));
    }
}
