use crate::adapters::csv::CsvEdgeSource;
use crate::adapters::render::{DotSceneRenderer, JsonSceneRenderer, RolePalette};
use crate::app::dto::*;
use crate::domain::builder::GraphBuilder;
use crate::domain::graph::ResourceGraph;
use crate::domain::impact::{ImpactPolicy, ImpactedSet};
use crate::domain::ports::{EdgeRecordSource, SceneRenderer};
use crate::domain::scene::GraphScene;
use anyhow::{Context as _, Result, anyhow, bail};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Shared handle over one frozen resource graph.
///
/// The graph is built completely before it is published and only read
/// afterwards; `reload` swaps in a freshly built graph.
#[derive(Clone)]
pub struct ImpactEngine {
    inner: Arc<RwLock<EngineData>>,
}

struct EngineData {
    source_path: PathBuf,
    graph: Arc<ResourceGraph>,
}

impl ImpactEngine {
    /// Construct an engine from an already-built graph.
    pub fn from_prebuilt(source_path: PathBuf, graph: ResourceGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(EngineData {
                source_path,
                graph: Arc::new(graph),
            })),
        }
    }

    pub fn load_from_csv(csv_path: &Path) -> Result<Self> {
        let graph = build_graph_from_csv(csv_path)?;
        info!(
            path = %csv_path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "resource graph loaded"
        );
        Ok(Self::from_prebuilt(csv_path.to_path_buf(), graph))
    }

    pub fn reload(&self) -> Result<HealthResponse> {
        let path = self.read()?.source_path.clone();
        let graph = build_graph_from_csv(&path)?;

        let mut data = self.write()?;
        data.graph = Arc::new(graph);
        info!(
            path = %path.display(),
            nodes = data.graph.node_count(),
            edges = data.graph.edge_count(),
            "resource graph reloaded"
        );
        Ok(health_of(&data))
    }

    pub fn health(&self) -> Result<HealthResponse> {
        Ok(health_of(&*self.read()?))
    }

    /// Current graph. Later reloads do not affect the returned snapshot.
    pub fn graph(&self) -> Result<Arc<ResourceGraph>> {
        Ok(self.read()?.graph.clone())
    }

    pub fn impact(&self, req: ImpactRequest) -> Result<ImpactResponse> {
        let graph = self.graph()?;
        let impacted = ImpactPolicy::from(req.policy).analyze(&graph, &req.resource);
        debug!(
            resource = %req.resource,
            policy = ?req.policy,
            impacted = impacted.len(),
            "impact computed"
        );

        Ok(ImpactResponse {
            known: graph.has_node(&req.resource),
            impacted_count: impacted.len(),
            impacted: impacted.into_iter().collect(),
            resource: req.resource,
            policy: req.policy,
        })
    }

    pub fn neighbors(&self, resource: &str) -> Result<NeighborsResponse> {
        let graph = self.graph()?;
        Ok(NeighborsResponse {
            resource: resource.to_string(),
            known: graph.has_node(resource),
            predecessors: graph
                .predecessors(resource)
                .into_iter()
                .map(String::from)
                .collect(),
            successors: graph
                .successors(resource)
                .into_iter()
                .map(String::from)
                .collect(),
        })
    }

    pub fn scene(&self, req: SceneRequest) -> Result<SceneResponse> {
        let graph = self.graph()?;

        let Some(altered) = req.resource else {
            if req.subgraph {
                bail!("A subgraph scene requires an altered resource");
            }
            return Ok(SceneResponse {
                altered: None,
                policy: None,
                subgraph: false,
                scene: GraphScene::from_graph(&graph, &ImpactedSet::new(), None),
            });
        };

        let impacted = ImpactPolicy::from(req.policy).analyze(&graph, &altered);
        let scene = if req.subgraph {
            let sub = graph.induced_subgraph(&impacted);
            GraphScene::from_graph(&sub, &impacted, Some(&altered))
        } else {
            GraphScene::from_graph(&graph, &impacted, Some(&altered))
        };

        Ok(SceneResponse {
            altered: Some(altered),
            policy: Some(req.policy),
            subgraph: req.subgraph,
            scene,
        })
    }

    pub fn render(&self, req: SceneRequest, format: RenderFormat) -> Result<String> {
        let palette = if req.subgraph {
            RolePalette::subgraph()
        } else {
            RolePalette::full_graph()
        };
        let response = self.scene(req)?;

        let renderer: Box<dyn SceneRenderer> = match format {
            RenderFormat::Json => Box::new(JsonSceneRenderer::new()),
            RenderFormat::Dot => Box::new(DotSceneRenderer::new(palette)),
        };
        renderer.render(&response.scene)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EngineData>> {
        self.inner
            .read()
            .map_err(|_| anyhow!("Engine state lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EngineData>> {
        self.inner
            .write()
            .map_err(|_| anyhow!("Engine state lock poisoned"))
    }
}

fn build_graph_from_csv(csv_path: &Path) -> Result<ResourceGraph> {
    let records = CsvEdgeSource::new(csv_path).load()?;
    GraphBuilder::new()
        .build(records)
        .with_context(|| format!("Failed to build resource graph from {}", csv_path.display()))
}

fn health_of(data: &EngineData) -> HealthResponse {
    HealthResponse {
        source_path: data.source_path.to_string_lossy().to_string(),
        node_count: data.graph.node_count(),
        edge_count: data.graph.edge_count(),
    }
}
