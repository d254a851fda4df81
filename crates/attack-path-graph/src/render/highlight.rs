//! Highlight-set adapter.
//!
//! Turns a path search outcome into the plain data a drawing backend needs:
//! which states and which exploit edges to mark. No drawing happens here.

use attack_path_core::types::FxHashSet;
use serde::Serialize;

use crate::path::PathOutcome;

/// States and exploit edges lying on the attack path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightSet {
    pub highlighted_nodes: FxHashSet<String>,
    pub highlighted_edges: FxHashSet<(String, String)>,
}

impl HighlightSet {
    pub fn is_empty(&self) -> bool {
        self.highlighted_nodes.is_empty() && self.highlighted_edges.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.highlighted_nodes.contains(id)
    }

    pub fn contains_edge(&self, src: &str, dst: &str) -> bool {
        self.highlighted_edges
            .contains(&(src.to_string(), dst.to_string()))
    }
}

/// Build the highlight set for `outcome`. `NotFound` gives two empty sets;
/// telling the user there is no attack path is the caller's job.
pub fn to_highlight_set(outcome: &PathOutcome) -> HighlightSet {
    let Some(path) = outcome.path() else {
        return HighlightSet::default();
    };

    HighlightSet {
        highlighted_nodes: path.nodes.iter().cloned().collect(),
        highlighted_edges: path
            .edges()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{AttackPath, AttackStep};

    #[test]
    fn test_not_found_gives_empty_sets() {
        let set = to_highlight_set(&PathOutcome::NotFound);
        assert!(set.highlighted_nodes.is_empty());
        assert!(set.highlighted_edges.is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn test_found_marks_every_node_and_edge() {
        let path = AttackPath {
            nodes: vec!["A".into(), "B".into(), "D".into()],
            steps: vec![
                AttackStep { source: "A".into(), target: "B".into(), exploit: None },
                AttackStep {
                    source: "B".into(),
                    target: "D".into(),
                    exploit: Some("Stored_Creds".into()),
                },
            ],
        };
        let set = to_highlight_set(&PathOutcome::Found(path));

        assert_eq!(set.highlighted_nodes.len(), 3);
        assert!(set.contains_node("A") && set.contains_node("B") && set.contains_node("D"));
        assert_eq!(set.highlighted_edges.len(), 2);
        assert!(set.contains_edge("A", "B"));
        assert!(set.contains_edge("B", "D"));
        assert!(!set.contains_edge("B", "A"));
    }

    #[test]
    fn test_zero_hop_path_highlights_single_node() {
        let path = AttackPath { nodes: vec!["A".into()], steps: Vec::new() };
        let set = to_highlight_set(&PathOutcome::Found(path));
        assert!(set.contains_node("A"));
        assert!(set.highlighted_edges.is_empty());
    }
}
