use crate::adapters::fs::reader::FileDocumentAccessor;
use crate::adapters::oracle::WorkspaceOracle;
use crate::app::dto::*;
use crate::app::navigator::Navigator;
use crate::config::Settings;
use crate::domain::hint::{HintMatcher, NavigationHint};
use crate::domain::ports::{DocumentAccessor, DocumentId};
use crate::domain::source::SourceText;
use anyhow::{Context as _, Result, anyhow, bail};
use std::sync::Arc;
use tokio::task::spawn_blocking;

/// Request facade shared by the CLI, HTTP and MCP front ends.
#[derive(Clone)]
pub struct NavEngine {
    inner: Arc<EngineData>,
}

struct EngineData {
    settings: Settings,
    matcher: HintMatcher,
    navigator: Navigator<WorkspaceOracle, FileDocumentAccessor>,
}

impl NavEngine {
    /// Resolve the workspace root and build the configured oracle.
    pub fn new(settings: Settings) -> Result<Self> {
        let settings = settings.resolved()?;
        let oracle = settings.build_oracle();
        Ok(Self::with_oracle(settings, oracle))
    }

    /// Construct an engine around an explicit oracle. `settings.workspace`
    /// is used as given.
    pub fn with_oracle(settings: Settings, oracle: WorkspaceOracle) -> Self {
        let accessor = FileDocumentAccessor::with_root(settings.workspace.clone());
        Self {
            inner: Arc::new(EngineData {
                matcher: HintMatcher::new(settings.scan),
                navigator: Navigator::new(oracle, accessor, settings.scan),
                settings,
            }),
        }
    }

    pub fn health(&self) -> HealthResponse {
        let settings = &self.inner.settings;
        HealthResponse {
            workspace: settings.workspace.to_string_lossy().to_string(),
            oracle: self.inner.navigator.oracle().kind().as_str().to_string(),
            lookahead_lines: settings.scan.lookahead_lines,
        }
    }

    /// Absolute, canonical id for a path relative to the workspace.
    pub fn document_id(&self, path: &str) -> Result<DocumentId> {
        let resolved = self.inner.navigator.accessor().resolve(&path.to_string());
        let canonical = std::fs::canonicalize(&resolved)
            .with_context(|| format!("Document not found: {}", resolved.display()))?;
        Ok(canonical.to_string_lossy().into_owned())
    }

    fn load(&self, req: &DocumentRequest) -> Result<(Option<DocumentId>, SourceText)> {
        match (&req.path, &req.text) {
            (_, Some(text)) => Ok((req.path.clone(), SourceText::new(text))),
            (Some(path), None) => {
                let id = self.document_id(path)?;
                let text = self.inner.navigator.accessor().open(&id)?;
                Ok((Some(id), text))
            }
            (None, None) => bail!("Either `path` or `text` is required"),
        }
    }

    pub fn scan(&self, req: DocumentRequest) -> Result<ScanResponse> {
        let (document, text) = self.load(&req)?;
        let scan = self.inner.matcher.scan(&text);
        Ok(ScanResponse::new(document, &scan))
    }

    pub fn hints(&self, req: DocumentRequest) -> Result<HintsResponse> {
        let (document, text) = self.load(&req)?;
        let hints = self.inner.matcher.hints(&text);
        Ok(HintsResponse {
            document,
            hints: hints.iter().map(HintDto::from).collect(),
        })
    }

    /// Activate the hint at `line` (and `column`, if given) of a file.
    pub async fn navigate(&self, req: NavigateRequest) -> Result<NavigateResponse> {
        let engine = self.clone();
        let (document, hint) = spawn_blocking(move || engine.hint_for(&req))
            .await
            .context("hint lookup task failed")??;

        let found = self.inner.navigator.lookup(&document, &hint).await;

        let engine = self.clone();
        spawn_blocking(move || {
            let outcome = engine.inner.navigator.resolve(&document, &hint, found);
            NavigateResponse::new(&hint, &outcome)
        })
        .await
        .context("navigation task failed")
    }

    fn hint_for(&self, req: &NavigateRequest) -> Result<(DocumentId, NavigationHint)> {
        let document = self.document_id(&req.path)?;
        let hint = self
            .inner
            .navigator
            .hint_at(&document, req.line, req.column)?
            .ok_or_else(|| anyhow!("No interface or receiver method at {}:{}", req.path, req.line + 1))?;
        Ok((document, hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("api.go"),
            "package p\n\ntype Closer interface {\n\tClose() error\n}\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("file.go"),
            "package p\n\nfunc (f *File) Close() error { return nil }\n",
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_navigate_jumps_to_single_implementation() {
        let dir = workspace();
        let engine = NavEngine::new(Settings::new(dir.path())).unwrap();

        let res = engine
            .navigate(NavigateRequest {
                path: "api.go".into(),
                line: 3,
                column: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(res.outcome, "jump");
        assert_eq!(res.targets[0].label, "File.Close");

        let missing = engine
            .navigate(NavigateRequest {
                path: "api.go".into(),
                line: 0,
                column: None,
            })
            .await;
        let err = missing.unwrap_err().to_string();
        assert!(err.contains("No interface or receiver method"));
    }

    #[test]
    fn test_health_reports_built_oracle() {
        let dir = workspace();
        let engine = NavEngine::new(Settings::new(dir.path())).unwrap();
        let health = engine.health();
        assert_eq!(health.oracle, "lexical");
        assert_eq!(health.lookahead_lines, 3);
    }
}
