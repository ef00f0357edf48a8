use crate::domain::error::GraphError;
use crate::domain::graph::ResourceGraph;
use crate::domain::record::EdgeRecord;
use tracing::debug;

/// Graph builder - Domain Service folding edge records into a ResourceGraph
#[derive(Debug, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Add every record in order. The first rejected record aborts the build;
    /// the partial graph is discarded.
    pub fn build<I>(&self, records: I) -> Result<ResourceGraph, GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = ResourceGraph::new();

        for (index, record) in records.into_iter().enumerate() {
            graph
                .add_edge(
                    &record.resource_id_from,
                    &record.resource_id_to,
                    record.integration_type,
                    record.metadata,
                )
                .map_err(|source| GraphError::InvalidRecord {
                    index,
                    source: Box::new(source),
                })?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built resource graph"
        );
        Ok(graph)
    }
}
