use crate::domain::impact::ImpactPolicy;
use crate::domain::scene::GraphScene;
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[derive(Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Altered resource plus direct predecessors and successors.
    FirstLevel,
    /// Direct predecessors plus everything reachable downstream.
    #[default]
    Transitive,
}

impl From<PolicyKind> for ImpactPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::FirstLevel => ImpactPolicy::FirstLevel,
            PolicyKind::Transitive => ImpactPolicy::Transitive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[derive(Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    Json,
    Dot,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub source_path: String,
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImpactRequest {
    pub resource: String,
    #[serde(default)]
    pub policy: PolicyKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImpactResponse {
    pub resource: String,
    pub policy: PolicyKind,
    /// Whether the resource appears in the graph at all.
    pub known: bool,
    /// Sorted by resource id.
    pub impacted: Vec<String>,
    pub impacted_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NeighborsResponse {
    pub resource: String,
    pub known: bool,
    pub predecessors: Vec<String>,
    pub successors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SceneRequest {
    /// Altered resource. Without it the plain graph is returned.
    pub resource: Option<String>,
    #[serde(default)]
    pub policy: PolicyKind,
    /// Restrict the scene to the impacted set (requires `resource`).
    #[serde(default)]
    pub subgraph: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SceneResponse {
    pub altered: Option<String>,
    pub policy: Option<PolicyKind>,
    pub subgraph: bool,
    pub scene: GraphScene,
}
