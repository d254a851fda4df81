//! Human-readable report and JSON export.

use std::fmt::Write;

use attack_path_core::errors::RenderError;
use attack_path_graph::PathOutcome;
use serde::Serialize;

use crate::pipeline::Analysis;

const RULE: &str = "========================================";

/// Text report printed after a search.
pub fn format_report(analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "MINIMUM ATTACK PATH REPORT");
    let _ = writeln!(out, "{RULE}");
    match &analysis.outcome {
        PathOutcome::Found(path) => {
            let _ = writeln!(out, "{path}");
            let _ = writeln!(out, "Exploits required: {}", path.hop_count());
            for (i, step) in path.steps.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {} --({})--> {}",
                    i + 1,
                    step.source,
                    step.exploit.as_deref().unwrap_or("unlabeled"),
                    step.target
                );
            }
        }
        PathOutcome::NotFound => {
            let _ = writeln!(
                out,
                "No attack path exists from {} to {}",
                analysis.source, analysis.target
            );
        }
    }
    let _ = writeln!(out, "{RULE}");
    out
}

#[derive(Debug, Serialize)]
struct GraphExport<'a> {
    source: &'a str,
    target: &'a str,
    outcome: &'a PathOutcome,
    nodes: Vec<NodeExport<'a>>,
    edges: Vec<EdgeExport<'a>>,
}

#[derive(Debug, Serialize)]
struct NodeExport<'a> {
    id: &'a str,
    is_critical: bool,
    highlighted: bool,
}

#[derive(Debug, Serialize)]
struct EdgeExport<'a> {
    source: &'a str,
    target: &'a str,
    exploit: Option<&'a str>,
    highlighted: bool,
}

/// JSON document with the full graph, the outcome, and highlight flags.
pub fn render_json(analysis: &Analysis) -> Result<String, RenderError> {
    let export = GraphExport {
        source: &analysis.source,
        target: &analysis.target,
        outcome: &analysis.outcome,
        nodes: analysis
            .graph
            .nodes()
            .map(|n| NodeExport {
                id: &n.id,
                is_critical: n.is_critical,
                highlighted: analysis.highlight.contains_node(&n.id),
            })
            .collect(),
        edges: analysis
            .graph
            .edges()
            .map(|(source, target, edge)| EdgeExport {
                source,
                target,
                exploit: edge.exploit.as_deref(),
                highlighted: analysis.highlight.contains_edge(source, target),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&export).map_err(|e| RenderError::Serialization(e.to_string()))
}
