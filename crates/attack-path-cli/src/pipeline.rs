//! One analysis run: scenario to graph to minimum attack path to highlights.

use std::path::{Path, PathBuf};

use attack_path_core::config::AttackPathConfig;
use attack_path_core::errors::{ConfigError, PipelineError, RenderError};
use attack_path_graph::path::critical_target;
use attack_path_graph::{
    shortest_path_within, to_highlight_set, AttackGraph, HighlightSet, PathOutcome, Scenario,
};

use crate::{dot, report};

/// Everything the presentation layer needs about one run.
#[derive(Debug)]
pub struct Analysis {
    pub graph: AttackGraph,
    pub source: String,
    pub target: String,
    pub outcome: PathOutcome,
    pub highlight: HighlightSet,
}

/// Build the scenario's graph and search it.
///
/// The entry point comes from config (CLI `--source` lands there) and falls
/// back to the scenario's own `source`. The target is `target` if given,
/// otherwise the graph's single critical asset.
pub fn analyze(
    scenario: &Scenario,
    config: &AttackPathConfig,
    target: Option<&str>,
) -> Result<Analysis, PipelineError> {
    let graph = scenario.build(&config.scenario)?;

    let source = config
        .search
        .default_source
        .clone()
        .or_else(|| scenario.source.clone())
        .ok_or_else(|| ConfigError::ValidationFailed {
            field: "search.default_source".to_string(),
            message: "no attacker entry point: pass --source or set `source` in the scenario"
                .to_string(),
        })?;

    let target = match target {
        Some(t) => t.to_string(),
        None => critical_target(&graph)?.to_string(),
    };

    let outcome = shortest_path_within(&graph, &source, &target, config.search.max_hops)?;
    let highlight = to_highlight_set(&outcome);

    Ok(Analysis {
        graph,
        source,
        target,
        outcome,
        highlight,
    })
}

/// Render `analysis` in the configured format and write it to the configured
/// path. Returns the path written.
pub fn write_output(analysis: &Analysis, config: &AttackPathConfig) -> Result<PathBuf, RenderError> {
    let path = config.output.effective_path();
    let contents = match config.output.effective_format() {
        "dot" => dot::render_dot(analysis, &config.render),
        "json" => report::render_json(analysis)?,
        other => return Err(RenderError::UnsupportedFormat(other.to_string())),
    };
    write_file(&path, &contents)?;
    tracing::info!(path = %path.display(), "attack graph written");
    Ok(path)
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::WriteFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| RenderError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
