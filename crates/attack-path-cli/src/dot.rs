//! Graphviz DOT drawing of an attack graph.
//!
//! Every state and exploit is drawn in the neutral style first; states and
//! exploits on the attack path are then overlaid in the highlight color.

use std::fmt::Write;

use attack_path_core::config::RenderConfig;

use crate::pipeline::Analysis;

const HIGHLIGHT_PENWIDTH: &str = "2.5";

/// Render the whole graph with the analysis' highlight set overlaid.
pub fn render_dot(analysis: &Analysis, style: &RenderConfig) -> String {
    let title = style
        .title
        .clone()
        .unwrap_or_else(|| default_title(analysis));
    let highlight = style.effective_highlight_color();

    let mut out = String::new();
    out.push_str("digraph attack_graph {\n");
    let _ = writeln!(out, "  label={};", quote(&title));
    out.push_str("  labelloc=t;\n");
    let _ = writeln!(
        out,
        "  node [shape=ellipse, style=filled, fillcolor={}, fontsize=10, fontname=\"Helvetica-Bold\"];",
        quote(style.effective_node_color())
    );
    let _ = writeln!(
        out,
        "  edge [color={}, fontcolor={}, fontsize=9];",
        quote(style.effective_edge_color()),
        quote(style.effective_label_color())
    );

    for node in analysis.graph.nodes() {
        let mut attrs: Vec<String> = Vec::new();
        if node.is_critical {
            attrs.push("shape=doubleoctagon".to_string());
        }
        if analysis.highlight.contains_node(&node.id) {
            attrs.push(format!("fillcolor={}", quote(highlight)));
            attrs.push(format!("penwidth={HIGHLIGHT_PENWIDTH}"));
        }
        let _ = writeln!(out, "  {}{};", quote(&node.id), attr_list(&attrs));
    }

    for (source, target, edge) in analysis.graph.edges() {
        let mut attrs: Vec<String> = Vec::new();
        if let Some(exploit) = &edge.exploit {
            attrs.push(format!("label={}", quote(exploit)));
        }
        if analysis.highlight.contains_edge(source, target) {
            attrs.push(format!("color={}", quote(highlight)));
            attrs.push(format!("penwidth={HIGHLIGHT_PENWIDTH}"));
        }
        let _ = writeln!(
            out,
            "  {} -> {}{};",
            quote(source),
            quote(target),
            attr_list(&attrs)
        );
    }

    out.push_str("}\n");
    out
}

fn default_title(analysis: &Analysis) -> String {
    if analysis.outcome.is_found() {
        format!("Minimum attack path (BFS)\nTarget reached: {}", analysis.target)
    } else {
        format!("No attack path from {} to {}", analysis.source, analysis.target)
    }
}

fn attr_list(attrs: &[String]) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" [{}]", attrs.join(", "))
    }
}

/// Quote a DOT identifier, escaping quotes, backslashes and newlines.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
