use crate::app::dto::*;
use crate::app::engine::NavEngine;
use rmcp::{
    Json, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, tool, tool_handler, tool_router,
    transport::stdio,
};
use tokio::task::spawn_blocking;

#[derive(Clone)]
pub struct GoLensMcpServer {
    engine: NavEngine,
    tool_router: ToolRouter<Self>,
}

impl GoLensMcpServer {
    pub fn new(engine: NavEngine) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}

#[tool_router]
impl GoLensMcpServer {
    #[tool(
        description = "List navigation hints (interface methods and receiver methods) in a Go file or inline Go text."
    )]
    async fn scan_hints(
        &self,
        params: Parameters<DocumentRequest>,
    ) -> Result<Json<HintsResponse>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.hints(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(description = "List interface blocks with their method signatures and receiver methods in a Go document.")]
    async fn scan_document(
        &self,
        params: Parameters<DocumentRequest>,
    ) -> Result<Json<ScanResponse>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.scan(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(
        description = "Go to implementation (from an interface method) or to interface (from a receiver method) at a 0-based line/column of a Go file."
    )]
    async fn navigate(
        &self,
        params: Parameters<NavigateRequest>,
    ) -> Result<Json<NavigateResponse>, String> {
        self.engine
            .navigate(params.0)
            .await
            .map(Json)
            .map_err(|e| e.to_string())
    }
}

#[tool_handler]
impl ServerHandler for GoLensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Navigate between Go interface methods and the receiver methods implementing them."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
