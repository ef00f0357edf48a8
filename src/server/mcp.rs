use crate::app::dto::*;
use crate::app::engine::ImpactEngine;
use rmcp::{
    Json, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, tool, tool_handler, tool_router,
    transport::stdio,
};
use tokio::task::spawn_blocking;

#[derive(Clone)]
pub struct ImpactMcpServer {
    engine: ImpactEngine,
    tool_router: ToolRouter<Self>,
}

impl ImpactMcpServer {
    pub fn new(engine: ImpactEngine) -> Self {
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
impl ImpactMcpServer {
    #[tool(
        description = "Compute the resources impacted by a change to one resource (first_level or transitive policy)."
    )]
    async fn impact(
        &self,
        params: Parameters<ImpactRequest>,
    ) -> Result<Json<ImpactResponse>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.impact(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(description = "List the direct predecessors and successors of a resource.")]
    async fn neighbors(
        &self,
        params: Parameters<NeighborsParams>,
    ) -> Result<Json<NeighborsResponse>, String> {
        let engine = self.engine.clone();
        let p = params.0;
        spawn_blocking(move || engine.neighbors(&p.resource))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(
        description = "Get the graph (or the impacted subgraph) with per-node roles for rendering."
    )]
    async fn scene(&self, params: Parameters<SceneRequest>) -> Result<Json<SceneResponse>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.scene(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, rmcp::schemars::JsonSchema)]
pub struct NeighborsParams {
    pub resource: String,
}

#[tool_handler]
impl ServerHandler for ImpactMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Answer 'what else is affected if this resource changes?' over a resource dependency graph."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
