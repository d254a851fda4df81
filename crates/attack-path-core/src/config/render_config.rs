//! Visualization style configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGHLIGHT_COLOR: &str = "red";
pub const DEFAULT_NODE_COLOR: &str = "lightblue";
pub const DEFAULT_EDGE_COLOR: &str = "gray";
pub const DEFAULT_LABEL_COLOR: &str = "blue";

/// Colors and title used when drawing the attack graph.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Color of nodes and edges on the attack path. Default: "red".
    pub highlight_color: Option<String>,
    /// Fill color of nodes off the path. Default: "lightblue".
    pub node_color: Option<String>,
    /// Color of edges off the path. Default: "gray".
    pub edge_color: Option<String>,
    /// Color of exploit labels. Default: "blue".
    pub label_color: Option<String>,
    /// Title override. Default: derived from the reached target.
    pub title: Option<String>,
}

impl RenderConfig {
    pub fn effective_highlight_color(&self) -> &str {
        self.highlight_color.as_deref().unwrap_or(DEFAULT_HIGHLIGHT_COLOR)
    }

    pub fn effective_node_color(&self) -> &str {
        self.node_color.as_deref().unwrap_or(DEFAULT_NODE_COLOR)
    }

    pub fn effective_edge_color(&self) -> &str {
        self.edge_color.as_deref().unwrap_or(DEFAULT_EDGE_COLOR)
    }

    pub fn effective_label_color(&self) -> &str {
        self.label_color.as_deref().unwrap_or(DEFAULT_LABEL_COLOR)
    }
}
