use crate::domain::graph::ResourceGraph;
use crate::domain::impact::ImpactedSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-query role annotation. Never stored on the graph itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    #[default]
    None,
    Impacted,
    Altered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SceneNode {
    pub id: String,
    pub metadata: String,
    pub role: NodeRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SceneEdge {
    pub source: String,
    pub target: String,
    pub integration_type: String,
    pub metadata: String,
}

/// Read-only snapshot handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct GraphScene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl GraphScene {
    /// Snapshot `graph` with roles: `Altered` wins over `Impacted`, anything
    /// else is `None`.
    pub fn from_graph(
        graph: &ResourceGraph,
        impacted: &ImpactedSet,
        altered: Option<&str>,
    ) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| {
                let role = if altered == Some(node.id.as_str()) {
                    NodeRole::Altered
                } else if impacted.contains(&node.id) {
                    NodeRole::Impacted
                } else {
                    NodeRole::None
                };
                SceneNode {
                    id: node.id.clone(),
                    metadata: node.metadata.clone(),
                    role,
                }
            })
            .collect();

        let edges = graph
            .edges()
            .map(|edge| SceneEdge {
                source: edge.source.to_string(),
                target: edge.target.to_string(),
                integration_type: edge.integration_type.to_string(),
                metadata: edge.metadata.to_string(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::impact::transitive_impact;

    #[test]
    fn test_roles_follow_altered_then_impacted() {
        let mut g = ResourceGraph::new();
        g.add_edge("a", "b", "http", "call").unwrap();
        g.add_edge("b", "c", "queue", "async").unwrap();
        g.add_edge("x", "y", "http", "other").unwrap();

        let impacted = transitive_impact(&g, "b");
        let scene = GraphScene::from_graph(&g, &impacted, Some("b"));

        assert_eq!(scene.node("b").unwrap().role, NodeRole::Altered);
        assert_eq!(scene.node("a").unwrap().role, NodeRole::Impacted);
        assert_eq!(scene.node("c").unwrap().role, NodeRole::Impacted);
        assert_eq!(scene.node("x").unwrap().role, NodeRole::None);
        assert_eq!(scene.edges.len(), 3);
        assert_eq!(scene.edges[1].integration_type, "queue");
    }

    #[test]
    fn test_plain_scene_has_no_roles() {
        let mut g = ResourceGraph::new();
        g.add_edge("a", "b", "http", "call").unwrap();

        let scene = GraphScene::from_graph(&g, &ImpactedSet::new(), None);
        assert!(scene.nodes.iter().all(|n| n.role == NodeRole::None));
        assert_eq!(scene.node("a").unwrap().metadata, "call");
    }
}
