//! Breadth-first shortest attack path.
//!
//! BFS discovers states in non-decreasing exploit count, so the first time the
//! target leaves the queue its predecessor chain is a minimum-hop path. Ties
//! between equally short paths go to the branch whose edges were inserted
//! first.

use std::collections::VecDeque;

use attack_path_core::errors::GraphError;
use attack_path_core::types::{FxHashMap, FxHashSet};
use petgraph::graph::NodeIndex;

use crate::graph::AttackGraph;

use super::types::{AttackPath, AttackStep, PathOutcome};

/// Find the minimum-hop attack path from `source` to `target`.
///
/// Fails only if either endpoint is absent from the graph. An unreachable
/// target yields [`PathOutcome::NotFound`].
pub fn shortest_path(
    graph: &AttackGraph,
    source: &str,
    target: &str,
) -> Result<PathOutcome, GraphError> {
    shortest_path_within(graph, source, target, None)
}

/// Like [`shortest_path`], but a target more than `max_hops` exploits away is
/// reported as not found.
pub fn shortest_path_within(
    graph: &AttackGraph,
    source: &str,
    target: &str,
    max_hops: Option<u32>,
) -> Result<PathOutcome, GraphError> {
    let from = graph.index_of(source)?;
    let to = graph.index_of(target)?;

    tracing::debug!(source, target, ?max_hops, "starting attack path search");

    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut prev: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::new();

    visited.insert(from);
    queue.push_back((from, 0));

    while let Some((node, depth)) = queue.pop_front() {
        if node == to {
            let path = reconstruct(graph, &prev, from, to);
            tracing::info!(
                source,
                target,
                hops = path.hop_count(),
                states_visited = visited.len(),
                "attack path found"
            );
            return Ok(PathOutcome::Found(path));
        }

        if max_hops.is_some_and(|max| depth >= max) {
            continue;
        }

        for next in graph.successors(node) {
            if visited.insert(next) {
                prev.insert(next, node);
                queue.push_back((next, depth + 1));
            }
        }
    }

    tracing::info!(
        source,
        target,
        states_visited = visited.len(),
        "no attack path to target"
    );
    Ok(PathOutcome::NotFound)
}

/// Find the minimum attack path from `source` to the graph's critical asset.
///
/// Exactly one node must be marked critical.
pub fn shortest_path_to_critical(
    graph: &AttackGraph,
    source: &str,
) -> Result<PathOutcome, GraphError> {
    let target = critical_target(graph)?;
    shortest_path(graph, source, target)
}

/// The single critical asset of `graph`.
pub fn critical_target(graph: &AttackGraph) -> Result<&str, GraphError> {
    let critical = graph.critical_nodes();
    match critical.as_slice() {
        [] => Err(GraphError::NoCriticalAsset),
        [only] => Ok(*only),
        many => Err(GraphError::AmbiguousCriticalAsset {
            ids: many.iter().map(|s| s.to_string()).collect(),
        }),
    }
}

/// Walk the predecessor chain back from `to` and build the path forwards.
fn reconstruct(
    graph: &AttackGraph,
    prev: &FxHashMap<NodeIndex, NodeIndex>,
    from: NodeIndex,
    to: NodeIndex,
) -> AttackPath {
    let mut chain = vec![to];
    let mut current = to;
    while current != from {
        match prev.get(&current) {
            Some(&p) => {
                chain.push(p);
                current = p;
            }
            None => break,
        }
    }
    chain.reverse();

    let steps = chain
        .windows(2)
        .map(|pair| AttackStep {
            source: graph.node_at(pair[0]).id.clone(),
            target: graph.node_at(pair[1]).id.clone(),
            exploit: graph
                .edge_between(pair[0], pair[1])
                .and_then(|e| e.exploit.clone()),
        })
        .collect();

    AttackPath {
        nodes: chain.iter().map(|&idx| graph.node_at(idx).id.clone()).collect(),
        steps,
    }
}
