//! The attack graph: states joined by directed exploit edges.

use attack_path_core::errors::GraphError;
use attack_path_core::types::{FxHashMap, SmallVec8};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::types::{AttackNode, ExploitEdge};

/// Directed attack graph.
///
/// Invariants:
/// - node ids are unique
/// - every edge joins two existing nodes
/// - no self-loops
/// - at most one edge per ordered (source, target) pair
///
/// Nodes and edges are never removed, so petgraph indices are dense and
/// follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct AttackGraph {
    graph: DiGraph<AttackNode, ExploitEdge>,
    node_index: FxHashMap<String, NodeIndex>,
}

impl AttackGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of exploit edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&AttackNode> {
        self.node_index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Insert a state. Fails if `id` is already present.
    pub fn add_node(&mut self, id: impl Into<String>, is_critical: bool) -> Result<(), GraphError> {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        let idx = self.graph.add_node(AttackNode {
            id: id.clone(),
            is_critical,
        });
        tracing::debug!(node = %id, is_critical, "state added");
        self.node_index.insert(id, idx);
        Ok(())
    }

    /// Insert an unlabeled exploit edge `src -> dst`.
    ///
    /// Re-adding an existing edge is a no-op. On error the graph is unchanged.
    pub fn add_edge(&mut self, src: &str, dst: &str) -> Result<(), GraphError> {
        self.insert_edge(src, dst, ExploitEdge::default())
    }

    /// Insert an exploit edge `src -> dst` labeled with the exploit used.
    ///
    /// Same rules as [`AttackGraph::add_edge`]; on a duplicate the first
    /// label is kept.
    pub fn add_exploit(
        &mut self,
        src: &str,
        dst: &str,
        exploit: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.insert_edge(
            src,
            dst,
            ExploitEdge {
                exploit: Some(exploit.into()),
            },
        )
    }

    fn insert_edge(&mut self, src: &str, dst: &str, edge: ExploitEdge) -> Result<(), GraphError> {
        let from = self.index_of(src)?;
        let to = self.index_of(dst)?;
        if from == to {
            return Err(GraphError::SelfLoop {
                id: src.to_string(),
            });
        }
        if self.graph.find_edge(from, to).is_some() {
            tracing::trace!(source = src, target = dst, "duplicate exploit edge ignored");
            return Ok(());
        }
        tracing::debug!(
            source = src,
            target = dst,
            exploit = edge.exploit.as_deref().unwrap_or("-"),
            "attack step added"
        );
        self.graph.add_edge(from, to, edge);
        Ok(())
    }

    /// States reachable from `id` through a single exploit, in edge
    /// insertion order.
    pub fn neighbors(&self, id: &str) -> Result<SmallVec8<&str>, GraphError> {
        let idx = self.index_of(id)?;
        Ok(self
            .successors(idx)
            .into_iter()
            .map(|n| self.graph[n].id.as_str())
            .collect())
    }

    pub fn has_edge(&self, src: &str, dst: &str) -> bool {
        match (self.node_index.get(src), self.node_index.get(dst)) {
            (Some(&from), Some(&to)) => self.graph.find_edge(from, to).is_some(),
            _ => false,
        }
    }

    /// Exploit label of the edge `src -> dst`, if the edge exists and is labeled.
    pub fn exploit(&self, src: &str, dst: &str) -> Option<&str> {
        let from = *self.node_index.get(src)?;
        let to = *self.node_index.get(dst)?;
        self.edge_between(from, to)?.exploit.as_deref()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &AttackNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All edges as `(source, target, edge)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &ExploitEdge)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                e.weight(),
            )
        })
    }

    /// Nodes marked as critical assets, in insertion order.
    pub fn critical_nodes(&self) -> Vec<&str> {
        self.nodes()
            .filter(|n| n.is_critical)
            .map(|n| n.id.as_str())
            .collect()
    }

    pub(crate) fn index_of(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::unknown(id))
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &AttackNode {
        &self.graph[idx]
    }

    pub(crate) fn edge_between(&self, from: NodeIndex, to: NodeIndex) -> Option<&ExploitEdge> {
        self.graph
            .find_edge(from, to)
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// Outgoing neighbors ordered by edge index. petgraph walks a node's
    /// adjacency list newest-first, so the order is restored explicitly.
    pub(crate) fn successors(&self, idx: NodeIndex) -> SmallVec8<NodeIndex> {
        let mut out: SmallVec8<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        out.sort_unstable_by_key(|(edge, _)| *edge);
        out.into_iter().map(|(_, target)| target).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> AttackGraph {
        let mut g = AttackGraph::new();
        for id in ["A", "B", "C", "D"] {
            g.add_node(id, id == "D").unwrap();
        }
        g.add_edge("A", "B").unwrap();
        g.add_edge("B", "D").unwrap();
        g.add_edge("A", "C").unwrap();
        g.add_edge("C", "D").unwrap();
        g
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut g = AttackGraph::new();
        g.add_node("A", false).unwrap();
        let err = g.add_node("A", true).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode { id: "A".into() });
        assert_eq!(g.node_count(), 1);
        assert!(!g.node("A").unwrap().is_critical);
    }

    #[test]
    fn test_unknown_endpoint_leaves_graph_unchanged() {
        let mut g = diamond();
        let before: Vec<_> = g.neighbors("A").unwrap().into_iter().map(String::from).collect();

        assert_eq!(g.add_edge("A", "Z").unwrap_err(), GraphError::unknown("Z"));
        assert_eq!(g.add_edge("Z", "A").unwrap_err(), GraphError::unknown("Z"));

        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.neighbors("A").unwrap().as_slice(), before.as_slice());
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = diamond();
        assert_eq!(
            g.add_edge("B", "B").unwrap_err(),
            GraphError::SelfLoop { id: "B".into() }
        );
        assert!(!g.has_edge("B", "B"));
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut g = diamond();
        g.add_edge("A", "B").unwrap();
        g.add_exploit("A", "B", "Late_Label").unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors("A").unwrap().as_slice(), &["B", "C"]);
        assert_eq!(g.exploit("A", "B"), None);
    }

    #[test]
    fn test_neighbors_follow_insertion_order() {
        let mut g = AttackGraph::new();
        for id in ["hub", "x", "y", "z"] {
            g.add_node(id, false).unwrap();
        }
        g.add_edge("hub", "z").unwrap();
        g.add_edge("hub", "x").unwrap();
        g.add_edge("hub", "y").unwrap();
        assert_eq!(g.neighbors("hub").unwrap().as_slice(), &["z", "x", "y"]);
    }

    #[test]
    fn test_neighbors_of_sink_and_unknown() {
        let g = diamond();
        assert!(g.neighbors("D").unwrap().is_empty());
        assert_eq!(g.neighbors("nope").unwrap_err(), GraphError::unknown("nope"));
    }

    #[test]
    fn test_exploit_labels_and_critical_nodes() {
        let mut g = AttackGraph::new();
        g.add_node("Internet", false).unwrap();
        g.add_node("WebServer", false).unwrap();
        g.add_node("Database_SQL", true).unwrap();
        g.add_exploit("Internet", "WebServer", "CVE-2023-XYZ (RCE)").unwrap();
        g.add_edge("WebServer", "Database_SQL").unwrap();

        assert_eq!(g.exploit("Internet", "WebServer"), Some("CVE-2023-XYZ (RCE)"));
        assert_eq!(g.exploit("WebServer", "Database_SQL"), None);
        assert_eq!(g.exploit("Database_SQL", "Internet"), None);
        assert_eq!(g.critical_nodes(), vec!["Database_SQL"]);

        let edges: Vec<_> = g.edges().map(|(s, t, _)| (s, t)).collect();
        assert_eq!(
            edges,
            vec![("Internet", "WebServer"), ("WebServer", "Database_SQL")]
        );
    }
}
