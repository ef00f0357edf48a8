use crate::domain::edge::{EdgeView, IntegrationEdge};
use crate::domain::error::{Endpoint, GraphError};
use crate::domain::node::{ResourceId, ResourceNode};
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Resource Graph - directed multigraph of resources and their integrations.
///
/// Nodes only come into existence through [`ResourceGraph::add_edge`]; parallel
/// edges between the same ordered pair are kept as distinct edges.
#[derive(Debug, Clone, Default)]
pub struct ResourceGraph {
    pub(crate) graph: DiGraph<ResourceNode, IntegrationEdge>,
    pub(crate) id_to_node: HashMap<ResourceId, NodeIndex>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new directed edge `source -> target`.
    ///
    /// Side effect: both endpoints are upserted and their metadata is overwritten
    /// with this record's metadata (last write wins). Nothing is mutated when an
    /// identifier is rejected.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        integration_type: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Result<EdgeIndex, GraphError> {
        if source.is_empty() {
            return Err(GraphError::InvalidInput {
                endpoint: Endpoint::Source,
            });
        }
        if target.is_empty() {
            return Err(GraphError::InvalidInput {
                endpoint: Endpoint::Target,
            });
        }

        let metadata = metadata.into();
        let source_idx = self.upsert_node(source, &metadata);
        let target_idx = self.upsert_node(target, &metadata);
        let edge = IntegrationEdge {
            integration_type: integration_type.into(),
            metadata,
        };
        Ok(self.graph.add_edge(source_idx, target_idx, edge))
    }

    fn upsert_node(&mut self, id: &str, metadata: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_node.get(id) {
            self.graph[idx].metadata.clear();
            self.graph[idx].metadata.push_str(metadata);
            return idx;
        }

        let idx = self.graph.add_node(ResourceNode::new(id, metadata));
        self.id_to_node.insert(id.to_string(), idx);
        idx
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.id_to_node.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&ResourceNode> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    pub fn metadata(&self, id: &str) -> Option<&str> {
        self.node(id).map(|node| node.metadata.as_str())
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_node.get(id).copied()
    }

    /// Distinct resources with at least one edge into `id`.
    pub fn predecessors(&self, id: &str) -> BTreeSet<&str> {
        self.neighbor_ids(id, Direction::Incoming)
    }

    /// Distinct resources with at least one edge out of `id`.
    pub fn successors(&self, id: &str) -> BTreeSet<&str> {
        self.neighbor_ids(id, Direction::Outgoing)
    }

    fn neighbor_ids(&self, id: &str, direction: Direction) -> BTreeSet<&str> {
        let Some(idx) = self.index_of(id) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors_directed(idx, direction)
            .map(|neighbor| self.graph[neighbor].id.as_str())
            .collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.graph.node_weights()
    }

    /// Every edge individually, parallel edges included, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.graph.edge_references().map(move |edge| EdgeView {
            source: self.graph[edge.source()].id.as_str(),
            target: self.graph[edge.target()].id.as_str(),
            integration_type: edge.weight().integration_type.as_str(),
            metadata: edge.weight().metadata.as_str(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Graph restricted to `ids`: the retained nodes keep their metadata and every
    /// edge with both endpoints retained is copied, parallel edges and self-loops
    /// included. Identifiers unknown to this graph are ignored.
    pub fn induced_subgraph<I, S>(&self, ids: I) -> ResourceGraph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keep: HashSet<NodeIndex> = ids
            .into_iter()
            .filter_map(|id| self.index_of(id.as_ref()))
            .collect();

        let graph = self.graph.filter_map(
            |idx, node| keep.contains(&idx).then(|| node.clone()),
            |_, edge| Some(edge.clone()),
        );
        let id_to_node = graph
            .node_indices()
            .map(|idx| (graph[idx].id.clone(), idx))
            .collect();

        ResourceGraph { graph, id_to_node }
    }
}
