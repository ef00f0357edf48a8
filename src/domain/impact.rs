use crate::domain::graph::ResourceGraph;
use crate::domain::node::ResourceId;
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use std::collections::BTreeSet;

/// Resources affected by a change. Set semantics; ordered for stable output only.
pub type ImpactedSet = BTreeSet<ResourceId>;

/// Impact policy. The two policies are not refinements of one another, so
/// callers always pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactPolicy {
    /// Altered resource plus its direct neighbors in both directions.
    FirstLevel,
    /// Direct predecessors plus everything reachable downstream.
    Transitive,
}

impl ImpactPolicy {
    pub fn analyze(self, graph: &ResourceGraph, altered: &str) -> ImpactedSet {
        match self {
            ImpactPolicy::FirstLevel => immediate_impact(graph, altered),
            ImpactPolicy::Transitive => transitive_impact(graph, altered),
        }
    }
}

/// `{altered} ∪ predecessors ∪ successors`.
///
/// An unknown resource yields `{altered}`.
pub fn immediate_impact(graph: &ResourceGraph, altered: &str) -> ImpactedSet {
    let mut impacted = ImpactedSet::new();
    impacted.insert(altered.to_string());
    impacted.extend(graph.predecessors(altered).into_iter().map(str::to_string));
    impacted.extend(graph.successors(altered).into_iter().map(str::to_string));
    impacted
}

/// Immediate predecessors (one hop upstream) plus the forward closure of
/// `altered`, which contains `altered` itself.
///
/// An unknown resource yields the empty set.
pub fn transitive_impact(graph: &ResourceGraph, altered: &str) -> ImpactedSet {
    if !graph.has_node(altered) {
        return ImpactedSet::new();
    }

    let mut impacted: ImpactedSet = graph
        .predecessors(altered)
        .into_iter()
        .map(str::to_string)
        .collect();
    impacted.extend(
        downstream_preorder(graph, altered)
            .into_iter()
            .map(str::to_string),
    );
    impacted
}

/// Depth-first preorder of every resource reachable from `start` by following
/// edges forward, `start` first.
///
/// Each node is emitted once no matter how many parallel edges or cycles lead
/// to it. Siblings are expanded in resource-id order.
pub fn downstream_preorder<'g>(graph: &'g ResourceGraph, start: &str) -> Vec<&'g str> {
    let Some(start) = graph.index_of(start) else {
        return Vec::new();
    };
    let g = &graph.graph;

    let mut visited = vec![false; g.node_count()];
    let mut order = Vec::new();
    let mut stack: Vec<NodeIndex> = vec![start];

    while let Some(current) = stack.pop() {
        if std::mem::replace(&mut visited[current.index()], true) {
            continue;
        }
        order.push(g[current].id.as_str());

        let mut next: Vec<NodeIndex> = g
            .neighbors_directed(current, Direction::Outgoing)
            .filter(|n| !visited[n.index()])
            .collect();
        next.sort_by(|a, b| g[*a].id.cmp(&g[*b].id));
        next.dedup();

        // Reversed so the smallest id is popped first.
        stack.extend(next.into_iter().rev());
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> ImpactedSet {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn chain_with_branch() -> ResourceGraph {
        // up -> a -> b -> c, a -> d, x -> up
        let mut g = ResourceGraph::new();
        g.add_edge("x", "up", "http", "").unwrap();
        g.add_edge("up", "a", "http", "").unwrap();
        g.add_edge("a", "b", "http", "").unwrap();
        g.add_edge("b", "c", "http", "").unwrap();
        g.add_edge("a", "d", "queue", "").unwrap();
        g
    }

    #[test]
    fn test_immediate_impact_is_one_hop() {
        let g = chain_with_branch();
        assert_eq!(immediate_impact(&g, "a"), set(&["up", "a", "b", "d"]));
    }

    #[test]
    fn test_transitive_impact_upstream_is_one_hop() {
        let g = chain_with_branch();
        // x is two hops upstream and must not appear.
        assert_eq!(transitive_impact(&g, "a"), set(&["up", "a", "b", "c", "d"]));
    }

    #[test]
    fn test_unknown_resource_asymmetry() {
        let g = chain_with_branch();
        assert_eq!(immediate_impact(&g, "ghost"), set(&["ghost"]));
        assert!(transitive_impact(&g, "ghost").is_empty());
        assert!(downstream_preorder(&g, "ghost").is_empty());
    }

    #[test]
    fn test_policy_dispatch() {
        let g = chain_with_branch();
        assert_eq!(
            ImpactPolicy::FirstLevel.analyze(&g, "b"),
            immediate_impact(&g, "b")
        );
        assert_eq!(
            ImpactPolicy::Transitive.analyze(&g, "b"),
            transitive_impact(&g, "b")
        );
    }

    #[test]
    fn test_preorder_visits_each_node_once() {
        let mut g = ResourceGraph::new();
        g.add_edge("a", "b", "http", "").unwrap();
        g.add_edge("a", "b", "grpc", "").unwrap();
        g.add_edge("a", "c", "http", "").unwrap();
        g.add_edge("c", "b", "http", "").unwrap();
        g.add_edge("b", "a", "http", "").unwrap();

        let order = downstream_preorder(&g, "a");
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], "a");
        let unique: BTreeSet<&str> = order.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_preorder_expands_siblings_in_id_order() {
        let mut g = ResourceGraph::new();
        g.add_edge("root", "z", "http", "").unwrap();
        g.add_edge("root", "m", "http", "").unwrap();
        g.add_edge("m", "m1", "http", "").unwrap();
        g.add_edge("root", "a", "http", "").unwrap();

        assert_eq!(
            downstream_preorder(&g, "root"),
            vec!["root", "a", "m", "m1", "z"]
        );
    }
}
